//! Mock pull request service for testing
//!
//! These are test utilities - not all may be used by every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use patchmanager::error::{Error, Result};
use patchmanager::platform::PullRequestService;
use patchmanager::types::PullRequestRef;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Call record for `add_labels`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLabelsCall {
    pub pr: PullRequestRef,
    pub labels: Vec<String>,
}

/// Simple mock pull request service for testing
///
/// Features:
/// - Configurable merge status per PR (unknown PRs are not merged)
/// - Call tracking for verification, in call order
/// - Error injection for failure path testing, globally or per PR
#[derive(Default)]
pub struct MockPullRequestService {
    merged: Mutex<HashSet<PullRequestRef>>,
    // Call tracking
    is_merged_calls: Mutex<Vec<PullRequestRef>>,
    add_labels_calls: Mutex<Vec<AddLabelsCall>>,
    // Error injection
    error_on_is_merged: Mutex<Option<String>>,
    error_on_add_labels: Mutex<Option<String>>,
    is_merged_errors: Mutex<HashMap<PullRequestRef, String>>,
}

impl MockPullRequestService {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a PR as merged
    pub fn set_merged(&self, owner: &str, repo: &str, number: u64) {
        self.merged
            .lock()
            .unwrap()
            .insert(PullRequestRef::new(owner, repo, number));
    }

    // === Error injection methods ===

    /// Make every `is_merged` call return an error
    pub fn fail_is_merged(&self, msg: &str) {
        *self.error_on_is_merged.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `is_merged` return an error for one PR only
    pub fn fail_is_merged_for(&self, owner: &str, repo: &str, number: u64, msg: &str) {
        self.is_merged_errors
            .lock()
            .unwrap()
            .insert(PullRequestRef::new(owner, repo, number), msg.to_string());
    }

    /// Make every `add_labels` call return an error
    pub fn fail_add_labels(&self, msg: &str) {
        *self.error_on_add_labels.lock().unwrap() = Some(msg.to_string());
    }

    // === Call inspection ===

    /// Get all `is_merged` calls in order
    pub fn get_is_merged_calls(&self) -> Vec<PullRequestRef> {
        self.is_merged_calls.lock().unwrap().clone()
    }

    /// Get all `add_labels` calls in order
    pub fn get_add_labels_calls(&self) -> Vec<AddLabelsCall> {
        self.add_labels_calls.lock().unwrap().clone()
    }

    /// Total number of API calls of either kind
    pub fn total_call_count(&self) -> usize {
        self.is_merged_calls.lock().unwrap().len() + self.add_labels_calls.lock().unwrap().len()
    }

    /// Assert that `add_labels` was called exactly once for a PR
    pub fn assert_labeled_once(&self, owner: &str, repo: &str, number: u64) {
        let target = PullRequestRef::new(owner, repo, number);
        let calls = self.get_add_labels_calls();
        let count = calls.iter().filter(|c| c.pr == target).count();
        assert_eq!(
            count, 1,
            "Expected exactly one add_labels({target}) but got: {calls:?}"
        );
    }
}

#[async_trait]
impl PullRequestService for MockPullRequestService {
    async fn is_merged(&self, pr: &PullRequestRef) -> Result<bool> {
        self.is_merged_calls.lock().unwrap().push(pr.clone());

        // Check for injected error
        if let Some(msg) = self.error_on_is_merged.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }
        if let Some(msg) = self.is_merged_errors.lock().unwrap().get(pr) {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(self.merged.lock().unwrap().contains(pr))
    }

    async fn add_labels(&self, pr: &PullRequestRef, labels: &[String]) -> Result<()> {
        self.add_labels_calls.lock().unwrap().push(AddLabelsCall {
            pr: pr.clone(),
            labels: labels.to_vec(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_add_labels.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(())
    }
}
