//! Single pull request status check

use crate::error::{Error, Result};
use crate::platform::{PullRequestService, parse_pr_url};
use crate::types::PullRequestRef;
use tracing::{debug, warn};

/// Outcome of both remote calls made for one pull request
///
/// The merge query and the label call are kept apart so a failure in one
/// never hides the other.
#[derive(Debug)]
pub struct StatusReport {
    /// The pull request that was checked
    pub pull_request: PullRequestRef,
    /// Result of the merge status query
    pub merged: Result<bool>,
    /// Result of adding the approval labels
    pub label: Result<()>,
}

impl StatusReport {
    /// Whether the pull request is known to be merged
    pub const fn is_merged(&self) -> bool {
        matches!(self.merged, Ok(true))
    }

    /// Collapse into the merge outcome.
    ///
    /// A query failure takes precedence, then `NotMerged`. Label failures do
    /// not affect the result.
    pub fn into_result(self) -> Result<()> {
        match self.merged {
            Ok(true) => Ok(()),
            Ok(false) => Err(Error::NotMerged),
            Err(e) => Err(e),
        }
    }
}

/// Checks merge status of pull requests and labels them as approved
pub struct StatusChecker<'a> {
    platform: &'a dyn PullRequestService,
    labels: Vec<String>,
}

impl<'a> StatusChecker<'a> {
    /// Create a checker that adds `labels` to every pull request it checks
    pub fn new(platform: &'a dyn PullRequestService, labels: Vec<String>) -> Self {
        Self { platform, labels }
    }

    /// Run the full check for one URL and report both calls.
    ///
    /// Only a malformed URL fails outright. Once the URL parses, the label
    /// call is made whatever the merge query returned.
    pub async fn check(&self, url: &str) -> Result<StatusReport> {
        let pr = parse_pr_url(url)?;
        debug!(%pr, "checking candidate");

        let merged = self.platform.is_merged(&pr).await;

        let label = self
            .platform
            .add_labels(&pr, &self.labels)
            .await
            .map_err(|e| Error::Label(e.to_string()));
        if let Err(e) = &label {
            warn!(url, error = %e, "could not label pull request");
        }

        Ok(StatusReport {
            pull_request: pr,
            merged,
            label,
        })
    }

    /// Check whether the pull request at `url` is merged.
    ///
    /// Returns `Error::NotMerged` when the query succeeds with a negative
    /// answer.
    pub async fn check_merged(&self, url: &str) -> Result<()> {
        self.check(url).await?.into_result()
    }
}
