//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PullRequestService;
use crate::types::{PlatformConfig, PullRequestRef};
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::{Client, StatusCode};
use tracing::debug;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    /// Token for raw HTTP requests (merge status probe)
    token: String,
    /// HTTP client for raw requests (merge status probe)
    http_client: Client,
    /// REST API base URL
    api_base: String,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, config: &PlatformConfig) -> Result<Self> {
        let api_base = config.api_base();

        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(&api_base)
            .map_err(|e| Error::GitHubApi(e.to_string()))?
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("patchmanager")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: token.to_string(),
            http_client,
            api_base,
        })
    }
}

#[async_trait]
impl PullRequestService for GitHubService {
    /// Query the merge endpoint directly
    ///
    /// GitHub answers `204` for merged and `404` for not merged. Anything
    /// else (bad credentials, missing repository access, rate limiting) is
    /// surfaced as an error instead of being read as "not merged".
    async fn is_merged(&self, pr: &PullRequestRef) -> Result<bool> {
        debug!(%pr, "checking merge status");

        let url = format!(
            "{}/repos/{}/{}/pulls/{}/merge",
            self.api_base, pr.owner, pr.repo, pr.number
        );

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to fetch merge status: {e}")))?;

        match response.status() {
            StatusCode::NO_CONTENT => {
                debug!(%pr, "pull request merged");
                Ok(true)
            }
            StatusCode::NOT_FOUND => {
                debug!(%pr, "pull request not merged");
                Ok(false)
            }
            status => Err(Error::GitHubApi(format!(
                "merge status check for {pr} returned {status}"
            ))),
        }
    }

    async fn add_labels(&self, pr: &PullRequestRef, labels: &[String]) -> Result<()> {
        debug!(%pr, ?labels, "adding labels");
        self.client
            .issues(&pr.owner, &pr.repo)
            .add_labels(pr.number, labels)
            .await?;
        debug!(%pr, "added labels");
        Ok(())
    }
}
