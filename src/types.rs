//! Core types for patchmanager

use serde::{Deserialize, Serialize};

/// Label applied to every checked pull request
pub const APPROVED_LABEL: &str = "cherry-pick-approved";

/// Decision value that marks a candidate for picking
pub const PICK_DECISION: &str = "pick";

/// A pull request identified by repository coordinates
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PullRequestRef {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Pull request number
    pub number: u64,
}

impl PullRequestRef {
    /// Create a new pull request reference
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }
}

impl std::fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// Platform configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Custom GitHub Enterprise host (None for github.com)
    pub host: Option<String>,
    /// Explicit API base URL, overrides `host`
    pub api_url: Option<String>,
}

impl PlatformConfig {
    /// REST API base URL without a trailing slash
    pub fn api_base(&self) -> String {
        if let Some(url) = &self.api_url {
            return url.trim_end_matches('/').to_string();
        }
        match &self.host {
            Some(h) => format!("https://{h}/api/v3"),
            None => "https://api.github.com".to_string(),
        }
    }
}
