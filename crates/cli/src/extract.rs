// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Derivation of project attributes from raw Jira records.
//!
//! Custom field ids come from [`FieldMap`]. Values that are missing or of an
//! unexpected shape leave the attribute at its default; extraction never
//! fails on incomplete records.

use serde_json::Value;
use tally_core::{
    extract_delivery_owner, Comment, Issue, IssueApprovals, IssueCollection, RawIssue,
    NO_STORY_POINTS,
};

use crate::config::{Config, FieldMap};

/// Builds [`Issue`]s from raw records according to a [`Config`].
pub struct Extractor<'a> {
    config: &'a Config,
}

impl<'a> Extractor<'a> {
    pub fn new(config: &'a Config) -> Self {
        Extractor { config }
    }

    /// Derives a full issue, including its directly linked issues.
    pub fn issue(&self, raw: RawIssue) -> Issue {
        let linked: IssueCollection = raw
            .fields
            .issue_links
            .iter()
            .filter_map(|link| link.linked_issue())
            .map(|other| self.derive(other.clone()))
            .collect();
        self.derive(raw).with_linked_issues(linked)
    }

    /// Derives every issue, preserving order.
    pub fn collection(&self, raws: Vec<RawIssue>) -> IssueCollection {
        raws.into_iter().map(|raw| self.issue(raw)).collect()
    }

    /// Derives attributes without following links.
    fn derive(&self, raw: RawIssue) -> Issue {
        let fields: &FieldMap = &self.config.fields;
        let custom = |id: &Option<String>| id.as_deref().and_then(|id| raw.custom(id));

        let story_points = custom(&fields.story_points)
            .map(parse_story_points)
            .unwrap_or(NO_STORY_POINTS);
        let approvals = custom(&fields.approvals)
            .map(parse_approvals)
            .unwrap_or_default();
        let qa_contact = custom(&fields.qa_contact).map(user_text).unwrap_or_default();
        let acceptance = custom(&fields.acceptance).map(text).unwrap_or_default();
        let impediment = custom(&fields.impediment).is_some_and(flagged);

        let owner = raw
            .fields
            .description
            .as_deref()
            .and_then(extract_delivery_owner)
            .unwrap_or_default();
        let link = self.config.issue_link(&raw.key);
        let parent_link = raw
            .fields
            .parent
            .as_ref()
            .map(|parent| self.config.issue_link(&parent.key))
            .unwrap_or_default();
        let comments = parse_comments(&raw);

        Issue::new(raw)
            .with_link(link)
            .with_parent_link(parent_link)
            .with_story_points(story_points)
            .with_approvals(approvals)
            .with_qa_contact(qa_contact)
            .with_acceptance(acceptance)
            .with_owner(owner)
            .with_impediment(impediment)
            .with_comments(comments)
    }
}

/// Story points from a numeric (or numeric string) field. Fractions truncate.
fn parse_story_points(value: &Value) -> i32 {
    let points = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match points {
        Some(p) if p.is_finite() => {
            p.trunc().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
        }
        _ => NO_STORY_POINTS,
    }
}

/// Approvals from a multi-select: option objects (`value`/`name`) or strings.
fn parse_approvals(value: &Value) -> IssueApprovals {
    let Value::Array(items) = value else {
        return IssueApprovals::default();
    };
    IssueApprovals::from_names(items.iter().filter_map(option_name))
}

fn option_name(item: &Value) -> Option<&str> {
    match item {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => map
            .get("value")
            .or_else(|| map.get("name"))
            .and_then(Value::as_str),
        _ => None,
    }
}

/// A user's display name, falling back to the user name.
fn user_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("displayName")
            .or_else(|| map.get("name"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}

fn text(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}

/// True for any non-empty flag value.
fn flagged(value: &Value) -> bool {
    match value {
        Value::Array(items) => !items.is_empty(),
        Value::String(s) => !s.is_empty(),
        Value::Bool(b) => *b,
        Value::Object(map) => !map.is_empty(),
        Value::Number(_) => true,
        Value::Null => false,
    }
}

/// Parses comments, skipping any with unreadable timestamps.
fn parse_comments(raw: &RawIssue) -> Vec<Comment> {
    let Some(page) = &raw.fields.comment else {
        return Vec::new();
    };
    page.comments
        .iter()
        .filter_map(|c| match Comment::from_raw(c.clone()) {
            Ok(comment) => Some(comment),
            Err(e) => {
                tracing::warn!("{}: skipping comment {}: {}", raw.key, c.id, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
