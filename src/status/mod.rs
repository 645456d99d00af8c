//! Merge status checking for approved candidates
//!
//! Two layers:
//! 1. Check - one pull request: parse, query merge status, add label
//! 2. Report - walk a candidate list and write one line per picked entry

mod checker;
mod report;

pub use checker::{StatusChecker, StatusReport};
pub use report::{StatusSummary, report_status};
