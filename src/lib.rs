//! patchmanager - merge status checks for approved cherry-picks
//!
//! Reads a list of approved cherry-pick candidates, asks GitHub whether each
//! picked pull request has been merged, and labels it as approved.

pub mod candidates;
pub mod config;
pub mod error;
pub mod platform;
pub mod status;
pub mod types;

pub use error::{Error, Result};
