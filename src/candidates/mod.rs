//! Approved cherry-pick candidate lists
//!
//! Candidate files are YAML documents produced by the triage step:
//!
//! ```yaml
//! items:
//!   - pullRequest:
//!       url: https://github.com/acme/widgets/pull/42
//!       decision: pick
//! ```

mod loader;

pub use loader::{load_candidates, parse_candidates};

use crate::types::PICK_DECISION;
use serde::{Deserialize, Serialize};

/// Ordered list of approved candidates, in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApprovedCandidateList {
    /// Candidates in the order they appear in the file
    #[serde(default)]
    pub items: Vec<ApprovedCandidate>,
}

impl ApprovedCandidateList {
    /// Iterate over candidates whose decision is `pick`
    pub fn picked(&self) -> impl Iterator<Item = &ApprovedCandidate> {
        self.items.iter().filter(|c| c.is_pick())
    }
}

/// One entry of the candidate list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedCandidate {
    /// The pull request this candidate refers to
    pub pull_request: CandidatePullRequest,
}

impl ApprovedCandidate {
    /// Pull request URL
    pub fn url(&self) -> &str {
        &self.pull_request.url
    }

    /// Whether this candidate was marked for picking
    pub fn is_pick(&self) -> bool {
        self.pull_request.decision == PICK_DECISION
    }
}

/// Pull request descriptor embedded in a candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePullRequest {
    /// Web URL of the pull request
    pub url: String,
    /// Disposition tag; only `pick` is acted upon
    #[serde(default)]
    pub decision: String,
    /// Human-readable summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Triage score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Why the decision was made
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_reason: Option<String>,
}
