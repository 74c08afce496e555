// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Delivery owner extraction from free text.
//!
//! Epics and initiatives name their delivery owner in the description using
//! Jira's user mention markup, e.g. `Delivery Owner: [~jdoe]`.

use regex::Regex;
use std::sync::LazyLock;

/// Pattern matching a delivery owner mention. Group 2 is the user name.
pub const DELIVERY_OWNER_PATTERN: &str =
    r"\W*(Delivery Owner|DELIVERY OWNER)\W*:\W*\[~([a-zA-Z0-9]*)\]";

static DELIVERY_OWNER_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(DELIVERY_OWNER_PATTERN) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Returns the user name of the first delivery owner mention in `text`.
///
/// Returns `None` when there is no mention or the mention is empty (`[~]`).
pub fn extract_delivery_owner(text: &str) -> Option<String> {
    let caps = DELIVERY_OWNER_RE.captures(text)?;
    caps.get(2)
        .map(|m| m.as_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "owner_tests.rs"]
mod tests;
