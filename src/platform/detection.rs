//! Pull request URL parsing

use crate::error::{Error, Result};
use crate::types::PullRequestRef;
use url::Url;

/// Parse a pull request web URL into its repository coordinates
///
/// Accepts `<scheme>://<host>/<owner>/<repo>/pull/<number>` on any host,
/// so GitHub Enterprise URLs parse the same way as github.com ones.
/// Trailing slashes are ignored.
pub fn parse_pr_url(raw: &str) -> Result<PullRequestRef> {
    let invalid = || Error::InvalidPullRequestUrl(raw.to_string());

    let url = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if url.host_str().is_none() {
        return Err(invalid());
    }

    let segments: Vec<&str> = url
        .path_segments()
        .ok_or_else(invalid)?
        .filter(|s| !s.is_empty())
        .collect();

    match segments.as_slice() {
        [owner, repo, "pull", number] => {
            if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let number = number
                .parse::<u64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(invalid)?;
            Ok(PullRequestRef::new(*owner, *repo, number))
        }
        _ => Err(invalid()),
    }
}
