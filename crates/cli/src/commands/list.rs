// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tally_core::{Issue, IssueCollection};

use crate::cli::{FilterArgs, OutputFormat};
use crate::config::Config;
use crate::display::format_issue_line;
use crate::error::Result;
use crate::filter::IssueFilter;

use super::{load_issues, select};

/// JSON representation of an issue for list output.
#[derive(Serialize)]
struct ListIssueJson<'a> {
    key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    issue_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
    summary: &'a str,
    story_points: i32,
    active: bool,
    resolved: bool,
    prioritized: bool,
    approved: bool,
    impeded: bool,
    #[serde(skip_serializing_if = "str::is_empty")]
    owner: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    link: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    linked_issues: Vec<&'a str>,
    comments: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_comment: Option<DateTime<Utc>>,
}

impl<'a> From<&'a Issue> for ListIssueJson<'a> {
    fn from(issue: &'a Issue) -> Self {
        ListIssueJson {
            key: issue.key(),
            issue_type: issue.raw.type_name(),
            status: issue.raw.status_name(),
            summary: issue.summary(),
            story_points: issue.story_points,
            active: issue.is_active(),
            resolved: issue.is_resolved(),
            prioritized: issue.is_prioritized(),
            approved: issue.approvals.approved(),
            impeded: issue.impediment,
            owner: &issue.owner,
            link: &issue.link,
            linked_issues: issue.linked_issues.keys(),
            comments: issue.comments.len(),
            last_comment: issue.comments.iter().map(|c| c.updated).max(),
        }
    }
}

/// JSON output structure for the list command.
#[derive(Serialize)]
struct ListOutputJson<'a> {
    issues: Vec<ListIssueJson<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters_applied: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

pub fn run(
    config: &Config,
    file: &Path,
    filter: &FilterArgs,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let issues = load_issues(config, file)?;
    run_impl(&issues, filter, limit, format, &mut std::io::stdout().lock())
}

/// Internal implementation that accepts loaded issues and a writer for testing.
pub(crate) fn run_impl(
    issues: &IssueCollection,
    filter: &FilterArgs,
    limit: Option<usize>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let filter = IssueFilter::from_args(filter)?;
    let selected = select(issues, &filter);
    let shown = selected.iter().take(limit.unwrap_or(usize::MAX));

    match format {
        OutputFormat::Text => {
            for issue in shown {
                writeln!(out, "{}", format_issue_line(issue))?;
            }
        }
        OutputFormat::Json => {
            let output = ListOutputJson {
                issues: shown.map(|issue| ListIssueJson::from(&**issue)).collect(),
                filters_applied: (!filter.is_empty()).then(|| filter.describe()),
                limit,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Id => {
            for issue in shown {
                writeln!(out, "{}", issue.key())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
