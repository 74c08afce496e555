// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tally-core operations.

use thiserror::Error;

/// All possible errors that can occur in tally-core operations.
///
/// Classification and aggregation never fail; these errors come from the
/// few construction paths that parse external input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid issue type: '{0}'\n  hint: valid types are: Initiative, Epic, Story, Task")]
    InvalidIssueType(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: Done, Obsolete, In Progress, Feature Complete, Code Review, QE Review")]
    InvalidStatus(String),

    #[error("invalid resolution: '{0}'\n  hint: valid resolutions are: Done")]
    InvalidResolution(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: Unprioritized")]
    InvalidPriority(String),

    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("index {index} out of bounds for collection of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tally-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
