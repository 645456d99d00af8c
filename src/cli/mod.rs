//! CLI command implementations

mod context;
mod status;

pub use status::{StatusArgs, run_status};
