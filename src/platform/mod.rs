//! Platform services for GitHub
//!
//! Provides the pull request operations needed to check cherry-pick candidates.

mod detection;
mod github;

pub use detection::parse_pr_url;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::PullRequestRef;
use async_trait::async_trait;

/// Platform service trait for pull request status operations
///
/// `GitHubService` talks to the REST API; tests substitute an in-memory
/// implementation.
#[async_trait]
pub trait PullRequestService: Send + Sync {
    /// Check whether a pull request has been merged
    ///
    /// Returns `Ok(false)` when the API answers that the pull request is not
    /// merged. Transport and authentication failures are errors.
    async fn is_merged(&self, pr: &PullRequestRef) -> Result<bool>;

    /// Add labels to the issue entry backing a pull request
    async fn add_labels(&self, pr: &PullRequestRef, labels: &[String]) -> Result<()>;
}
