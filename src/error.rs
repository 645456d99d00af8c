//! Error types for patchmanager

use thiserror::Error;

/// Errors produced while checking cherry-pick candidates
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration is missing or invalid
    #[error("{0}")]
    Config(String),

    /// Candidate file could not be read or deserialized
    #[error("candidate file error: {0}")]
    CandidateFile(String),

    /// URL is not a pull request URL
    #[error("invalid pull request URL '{0}': expected <host>/<owner>/<repo>/pull/<number>")]
    InvalidPullRequestUrl(String),

    /// GitHub API returned an error or could not be reached
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Error raised by the octocrab client
    #[error("GitHub API error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Merge status query succeeded, but the pull request is not merged
    #[error("not merged")]
    NotMerged,

    /// Approval label could not be added
    #[error("failed to add label: {0}")]
    Label(String),

    /// I/O error writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error must abort the whole run rather than a single candidate
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::CandidateFile(_) | Self::Io(_))
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
