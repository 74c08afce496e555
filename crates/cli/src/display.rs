// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tally_core::Issue;

/// Placeholder for a missing type or status.
const UNSET: &str = "-";

/// Width of the label column in summary output.
pub const LABEL_WIDTH: usize = 15;

/// Format a single issue line for list output
pub fn format_issue_line(issue: &Issue) -> String {
    let mut line = format!(
        "{} [{}] ({}) {}pt {}",
        issue.key(),
        issue.raw.type_name().unwrap_or(UNSET),
        issue.raw.status_name().unwrap_or(UNSET),
        issue.story_points,
        issue.summary()
    );
    if !issue.owner.is_empty() {
        line.push_str(" @");
        line.push_str(&issue.owner);
    }
    line
}

/// Format a `label: value` row with the value column aligned.
pub fn format_count(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<width$}{}", format!("{}:", label), value, width = LABEL_WIDTH)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
