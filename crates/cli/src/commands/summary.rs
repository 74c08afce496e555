// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tally_core::IssueCollection;

use crate::cli::{FilterArgs, OutputFormat};
use crate::colors;
use crate::config::Config;
use crate::display::format_count;
use crate::error::Result;
use crate::filter::IssueFilter;

use super::{load_issues, select};

/// Counts and story-point total over a set of issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub issues: usize,
    pub with_points: usize,
    pub story_points: i64,
    pub active: usize,
    pub resolved: usize,
    pub unprioritized: usize,
    pub approved: usize,
    pub impeded: usize,
}

impl Summary {
    pub fn of(issues: &IssueCollection) -> Self {
        Summary {
            issues: issues.count(|_| true),
            with_points: issues.count(|i| i.has_story_points()),
            story_points: issues.story_points(),
            active: issues.count(|i| i.is_active()),
            resolved: issues.count(|i| i.is_resolved()),
            unprioritized: issues.count(|i| !i.is_prioritized()),
            approved: issues.count(|i| i.approvals.approved()),
            impeded: issues.count(|i| i.impediment),
        }
    }

    fn rows(&self) -> [(&'static str, i64); 8] {
        [
            ("issues", self.issues as i64),
            ("with points", self.with_points as i64),
            ("story points", self.story_points),
            ("active", self.active as i64),
            ("resolved", self.resolved as i64),
            ("unprioritized", self.unprioritized as i64),
            ("approved", self.approved as i64),
            ("impeded", self.impeded as i64),
        ]
    }
}

/// JSON output structure for the summary command.
#[derive(Serialize)]
struct SummaryOutputJson {
    #[serde(flatten)]
    summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters_applied: Option<Vec<String>>,
}

pub fn run(config: &Config, file: &Path, filter: &FilterArgs, format: OutputFormat) -> Result<()> {
    let issues = load_issues(config, file)?;
    run_impl(&issues, filter, format, &mut std::io::stdout().lock())
}

/// Internal implementation that accepts loaded issues and a writer for testing.
pub(crate) fn run_impl(
    issues: &IssueCollection,
    filter: &FilterArgs,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let filter = IssueFilter::from_args(filter)?;
    let selected = select(issues, &filter);
    let summary = Summary::of(&selected);

    match format {
        OutputFormat::Text => {
            if !filter.is_empty() {
                writeln!(
                    out,
                    "{}",
                    colors::context(&format!("filters: {}", filter.describe().join(" ")))
                )?;
            }
            for (label, value) in summary.rows() {
                writeln!(out, "{}", format_count(label, value))?;
            }
        }
        OutputFormat::Json => {
            let output = SummaryOutputJson {
                summary,
                filters_applied: (!filter.is_empty()).then(|| filter.describe()),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Id => {
            for key in selected.keys() {
                writeln!(out, "{}", key)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
