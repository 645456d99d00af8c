//! Status command - report merge status of picked candidates

use crate::cli::context::CommandContext;
use clap::Args;
use patchmanager::config::{GITHUB_TOKEN_ENV, StatusConfig, StatusInputs};
use patchmanager::error::Result;
use patchmanager::status::{StatusChecker, report_status};
use patchmanager::types::PlatformConfig;
use std::path::PathBuf;
use tracing::debug;

/// Arguments for the status command
#[derive(Args, Debug, Clone, Default)]
pub struct StatusArgs {
    /// GitHub access token (falls back to the `GITHUB_TOKEN` environment variable)
    #[arg(long)]
    pub github_token: Option<String>,

    /// Input file with the list of approved candidates
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Label to add to each checked pull request (repeatable)
    #[arg(long = "label", value_name = "LABEL")]
    pub labels: Vec<String>,

    /// GitHub Enterprise host (e.g. github.example.com)
    #[arg(long)]
    pub host: Option<String>,

    /// Override the GitHub REST API base URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,
}

impl StatusArgs {
    fn into_inputs(self, env_token: Option<String>) -> StatusInputs {
        StatusInputs {
            github_token: self.github_token,
            env_token,
            file: self.file,
            labels: self.labels,
            platform: PlatformConfig {
                host: self.host,
                api_url: self.api_url,
            },
        }
    }
}

/// Run the status command
#[allow(clippy::future_not_send)]
pub async fn run_status(args: StatusArgs) -> Result<()> {
    let config = StatusConfig::resolve(args.into_inputs(std::env::var(GITHUB_TOKEN_ENV).ok()))?;
    debug!(file = %config.file.display(), labels = ?config.labels, "resolved configuration");

    let ctx = CommandContext::new(config)?;
    let checker = StatusChecker::new(ctx.platform.as_ref(), ctx.config.labels.clone());

    let mut stdout = anstream::stdout();
    report_status(&ctx.candidates, &checker, &mut stdout).await?;
    Ok(())
}
