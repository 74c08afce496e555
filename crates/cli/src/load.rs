// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading Jira exports.
//!
//! Accepts either a search response (`{"issues": [...], ...}`) or a bare
//! JSON array of issues. A path of `-` reads standard input.

use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tally_core::RawIssue;

use crate::error::{Error, Result};

/// Reads and parses an export file.
pub fn load_export(path: &Path) -> Result<Vec<RawIssue>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?
    };
    let issues = parse_export(&content, path)?;
    tracing::info!("loaded {} issues from {}", issues.len(), path.display());
    Ok(issues)
}

/// Parses export content. `path` is only used in error messages.
pub fn parse_export(content: &str, path: &Path) -> Result<Vec<RawIssue>> {
    let invalid = |reason: String| Error::InvalidExport {
        path: path.to_path_buf(),
        reason,
    };

    let value: Value = serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?;
    let issues = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove("issues") {
            Some(issues @ Value::Array(_)) => issues,
            Some(_) => return Err(invalid("'issues' is not an array".to_string())),
            None => return Err(invalid("missing 'issues' array".to_string())),
        },
        _ => return Err(invalid("top-level value must be an object or array".to_string())),
    };

    serde_json::from_value(issues).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
