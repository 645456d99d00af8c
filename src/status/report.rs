//! Status report over a candidate list

use crate::candidates::ApprovedCandidateList;
use crate::error::{Error, Result};
use crate::status::StatusChecker;
use std::io::Write;
use tracing::{debug, info};

/// Counts from one report run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    /// Candidates with decision `pick` that were checked
    pub checked: usize,
    /// Checked candidates that are merged
    pub merged: usize,
    /// Checked candidates the API reported as not merged
    pub not_merged: usize,
    /// Checked candidates that failed (bad URL or API error)
    pub failed: usize,
    /// Candidates skipped because their decision is not `pick`
    pub skipped: usize,
    /// Checked candidates whose label call failed
    pub label_failures: usize,
}

/// Check every picked candidate and write one status line per candidate.
///
/// Lines have the form `"<url>": merged` or `"<url>": <error>` and appear in
/// file order. Per-candidate failures are written as lines; only a failure
/// to write to `out` is returned as an error.
#[allow(clippy::future_not_send)]
pub async fn report_status<W: Write>(
    list: &ApprovedCandidateList,
    checker: &StatusChecker<'_>,
    out: &mut W,
) -> Result<StatusSummary> {
    let mut summary = StatusSummary::default();

    for candidate in &list.items {
        let url = candidate.url();
        if !candidate.is_pick() {
            debug!(url, decision = %candidate.pull_request.decision, "skipping candidate");
            summary.skipped += 1;
            continue;
        }

        summary.checked += 1;
        let outcome = match checker.check(url).await {
            Ok(report) => {
                if report.label.is_err() {
                    summary.label_failures += 1;
                }
                report.into_result()
            }
            Err(e) => Err(e),
        };

        let line = match outcome {
            Ok(()) => {
                summary.merged += 1;
                "merged".to_string()
            }
            Err(e @ Error::NotMerged) => {
                summary.not_merged += 1;
                e.to_string()
            }
            Err(e) => {
                summary.failed += 1;
                e.to_string()
            }
        };

        writeln!(out, "{url:?}: {line}")?;
    }

    out.flush()?;

    info!(
        checked = summary.checked,
        merged = summary.merged,
        not_merged = summary.not_merged,
        failed = summary.failed,
        skipped = summary.skipped,
        label_failures = summary.label_failures,
        "status report complete"
    );
    Ok(summary)
}
