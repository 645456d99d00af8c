//! patchmanager CLI

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "patchmanager")]
#[command(
    version,
    about = "Check merge status of approved cherry-pick candidates",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether each picked candidate has been merged
    ///
    /// Adds the approval label to every checked pull request.
    Status(cli::StatusArgs),
}

/// Install the global subscriber; `RUST_LOG` overrides the verbosity flag
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() -> ExitCode {
    let opts = Cli::parse();
    init_tracing(opts.verbose);

    let result = match opts.command {
        Commands::Status(args) => cli::run_status(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            anstream::eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
