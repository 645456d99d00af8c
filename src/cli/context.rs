//! Shared command context for CLI commands
//!
//! Performs the one-shot setup the status command needs before any
//! candidate is checked.

use patchmanager::candidates::{ApprovedCandidateList, load_candidates};
use patchmanager::config::StatusConfig;
use patchmanager::error::Result;
use patchmanager::platform::{GitHubService, PullRequestService};

/// Everything a status run needs, resolved up front
///
/// Building the context reads and parses the whole candidate file and
/// creates the platform client, so any failure here happens before the
/// first API call.
pub struct CommandContext {
    /// Validated configuration
    pub config: StatusConfig,
    /// Candidates in file order
    pub candidates: ApprovedCandidateList,
    /// Platform service (GitHub)
    pub platform: Box<dyn PullRequestService>,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(config: StatusConfig) -> Result<Self> {
        let candidates = load_candidates(&config.file)?;
        let platform = GitHubService::new(&config.token, &config.platform)?;

        Ok(Self {
            config,
            candidates,
            platform: Box::new(platform),
        })
    }
}
