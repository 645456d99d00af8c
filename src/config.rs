//! Run configuration for the status command

use crate::error::{Error, Result};
use crate::types::{APPROVED_LABEL, PlatformConfig};
use std::path::PathBuf;

/// Environment variable consulted when no token flag is given
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Raw status command inputs, before validation
#[derive(Debug, Clone, Default)]
pub struct StatusInputs {
    /// Token from `--github-token`
    pub github_token: Option<String>,
    /// Token from the environment
    pub env_token: Option<String>,
    /// Candidate file from `--file`
    pub file: Option<PathBuf>,
    /// Labels from `--label`; empty means the default approval label
    pub labels: Vec<String>,
    /// Platform selection
    pub platform: PlatformConfig,
}

/// Validated, immutable configuration for one status run
#[derive(Debug, Clone)]
pub struct StatusConfig {
    /// GitHub access token
    pub token: String,
    /// Candidate file to read
    pub file: PathBuf,
    /// Labels added to each checked pull request
    pub labels: Vec<String>,
    /// Platform selection
    pub platform: PlatformConfig,
}

impl StatusConfig {
    /// Resolve inputs into a configuration.
    ///
    /// The flag token wins over the environment token. Empty values count as
    /// missing.
    pub fn resolve(inputs: StatusInputs) -> Result<Self> {
        let token = non_empty(inputs.github_token)
            .or_else(|| non_empty(inputs.env_token))
            .ok_or_else(|| {
                Error::Config(format!(
                    "github-token flag must be specified or {GITHUB_TOKEN_ENV} environment \
                     must be set"
                ))
            })?;

        let file = inputs
            .file
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| Error::Config("input file must be specified".to_string()))?;

        let mut labels: Vec<String> = inputs
            .labels
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        if labels.is_empty() {
            labels.push(APPROVED_LABEL.to_string());
        }

        Ok(Self {
            token,
            file,
            labels,
            platform: inputs.platform,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
