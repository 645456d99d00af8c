//! Reading candidate lists from disk.

use super::ApprovedCandidateList;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a candidate list from a YAML file.
///
/// Both a missing file and malformed YAML are errors; nothing is checked
/// until the whole list has been read.
pub fn load_candidates(path: &Path) -> Result<ApprovedCandidateList> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::CandidateFile(format!("failed to read {}: {e}", path.display())))?;

    let list = parse_candidates(&content)
        .map_err(|e| Error::CandidateFile(format!("failed to parse {}: {e}", path.display())))?;

    debug!(path = %path.display(), count = list.items.len(), "loaded candidates");
    Ok(list)
}

/// Parse a candidate list from YAML text.
///
/// An empty document yields an empty list.
pub fn parse_candidates(
    content: &str,
) -> std::result::Result<ApprovedCandidateList, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(ApprovedCandidateList::default());
    }
    serde_yaml::from_str(content)
}
