// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter group parsing and matching.
//!
//! Comma-separated values within one flag are OR'd, repeated flags are
//! AND'd, and distinct filters are AND'd together.

use tally_core::{Issue, IssueCollection, IssueStatus, IssueType};

use crate::cli::FilterArgs;
use crate::error::Result;

/// Boolean classification filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Active,
    Resolved,
    Unresolved,
    Unprioritized,
    WithPoints,
    Approved,
    Impeded,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Active => "active",
            Flag::Resolved => "resolved",
            Flag::Unresolved => "unresolved",
            Flag::Unprioritized => "unprioritized",
            Flag::WithPoints => "with-points",
            Flag::Approved => "approved",
            Flag::Impeded => "impeded",
        }
    }

    pub fn matches(&self, issue: &Issue) -> bool {
        match self {
            Flag::Active => issue.is_active(),
            Flag::Resolved => issue.is_resolved(),
            Flag::Unresolved => !issue.is_resolved(),
            Flag::Unprioritized => !issue.is_prioritized(),
            Flag::WithPoints => issue.has_story_points(),
            Flag::Approved => issue.approvals.approved(),
            Flag::Impeded => issue.impediment,
        }
    }
}

/// Parsed filter criteria.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    pub types: Option<Vec<Vec<IssueType>>>,
    pub statuses: Option<Vec<Vec<IssueStatus>>>,
    pub components: Option<Vec<Vec<String>>>,
    pub flags: Vec<Flag>,
}

impl IssueFilter {
    /// Builds a filter from command-line arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if a type or status is outside the project vocabulary.
    pub fn from_args(args: &FilterArgs) -> Result<Self> {
        let flags = [
            (args.active, Flag::Active),
            (args.resolved, Flag::Resolved),
            (args.unresolved, Flag::Unresolved),
            (args.unprioritized, Flag::Unprioritized),
            (args.with_points, Flag::WithPoints),
            (args.approved, Flag::Approved),
            (args.impeded, Flag::Impeded),
        ]
        .into_iter()
        .filter_map(|(set, flag)| set.then_some(flag))
        .collect();

        Ok(IssueFilter {
            types: parse_filter_groups(&args.r#type, |s| Ok(s.parse::<IssueType>()?))?,
            statuses: parse_filter_groups(&args.status, |s| Ok(s.parse::<IssueStatus>()?))?,
            components: parse_filter_groups(&args.component, |s| Ok(s.to_string()))?,
            flags,
        })
    }

    /// Check if an issue matches this filter.
    pub fn matches(&self, issue: &Issue) -> bool {
        matches_filter_groups(&self.types, |t| issue.is_type(*t))
            && matches_filter_groups(&self.statuses, |s| issue.in_status(*s))
            && matches_filter_groups(&self.components, |c| issue.has_component(c))
            && self.flags.iter().all(|flag| flag.matches(issue))
    }

    /// Returns the matching issues, in order.
    pub fn apply(&self, issues: &IssueCollection) -> IssueCollection {
        issues.filter_by(|issue| self.matches(issue))
    }

    /// Human-readable description of each active filter.
    pub fn describe(&self) -> Vec<String> {
        let mut out = Vec::new();
        describe_groups(&mut out, "type", &self.types);
        describe_groups(&mut out, "status", &self.statuses);
        describe_groups(&mut out, "component", &self.components);
        out.extend(self.flags.iter().map(|f| f.as_str().to_string()));
        out
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_none()
            && self.statuses.is_none()
            && self.components.is_none()
            && self.flags.is_empty()
    }
}

fn describe_groups<T: std::fmt::Display>(
    out: &mut Vec<String>,
    name: &str,
    groups: &Option<Vec<Vec<T>>>,
) {
    for group in groups.iter().flatten() {
        let values: Vec<String> = group.iter().map(|v| v.to_string()).collect();
        out.push(format!("{}={}", name, values.join(",")));
    }
}

/// Parse filter values: comma-separated values within each Vec entry are OR'd,
/// multiple Vec entries are AND'd together.
/// Returns None if no filters provided, Some(groups) otherwise.
pub(crate) fn parse_filter_groups<T, F>(
    values: &[String],
    parse_fn: F,
) -> Result<Option<Vec<Vec<T>>>>
where
    F: Fn(&str) -> Result<T>,
{
    if values.is_empty() {
        return Ok(None);
    }

    let mut groups = Vec::new();
    for value in values {
        let mut group = Vec::new();
        for part in value.split(',') {
            let part = part.trim();
            if !part.is_empty() {
                group.push(parse_fn(part)?);
            }
        }
        if !group.is_empty() {
            groups.push(group);
        }
    }

    if groups.is_empty() {
        Ok(None)
    } else {
        Ok(Some(groups))
    }
}

/// Check if an issue matches the filter groups.
/// Each group is OR'd internally, all groups must match (AND).
pub(crate) fn matches_filter_groups<T, F>(groups: &Option<Vec<Vec<T>>>, matches: F) -> bool
where
    F: Fn(&T) -> bool,
{
    match groups {
        None => true,
        Some(groups) => groups.iter().all(|group| group.iter().any(&matches)),
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
