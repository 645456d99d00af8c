//! Shared test helpers

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::{AddLabelsCall, MockPullRequestService};

use patchmanager::candidates::{ApprovedCandidate, ApprovedCandidateList, CandidatePullRequest};
use std::io::Write;
use tempfile::NamedTempFile;

/// Build a candidate with the given URL and decision
pub fn candidate(url: &str, decision: &str) -> ApprovedCandidate {
    ApprovedCandidate {
        pull_request: CandidatePullRequest {
            url: url.to_string(),
            decision: decision.to_string(),
            description: None,
            score: None,
            decision_reason: None,
        },
    }
}

/// Build a candidate list from (url, decision) pairs
pub fn candidate_list(entries: &[(&str, &str)]) -> ApprovedCandidateList {
    ApprovedCandidateList {
        items: entries.iter().map(|(u, d)| candidate(u, d)).collect(),
    }
}

/// Pull request URL on github.com
pub fn pr_url(owner: &str, repo: &str, number: u64) -> String {
    format!("https://github.com/{owner}/{repo}/pull/{number}")
}

/// Write a candidate list as YAML to a temp file
pub fn write_candidates_file(entries: &[(&str, &str)]) -> NamedTempFile {
    let mut yaml = String::from("items:\n");
    for (url, decision) in entries {
        yaml.push_str(&format!(
            "  - pullRequest:\n      url: {url}\n      decision: {decision}\n"
        ));
    }
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}
