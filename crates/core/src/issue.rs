// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The issue model: a raw tracker record plus project-derived facts.
//!
//! [`Issue`] composes the externally owned [`RawIssue`] with attributes the
//! extraction step fills in (story points, approvals, ownership, links).
//! Classification methods are pure reads of that state. Absent optional
//! fields resolve to a fixed default rather than an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::IssueCollection;
use crate::error::{Error, Result};
use crate::raw::{RawComment, RawIssue};
use crate::vocabulary::{IssuePriority, IssueResolution, IssueStatus, IssueType};

/// Story point value meaning "not estimated".
pub const NO_STORY_POINTS: i32 = 0;

/// Jira's timestamp format, e.g. `2024-01-15T10:30:00.000+0000`.
const JIRA_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Sign-off gates recorded on an issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueApprovals {
    pub development: bool,
    pub product: bool,
    pub quality: bool,
    pub experience: bool,
    pub documentation: bool,
    pub support: bool,
}

impl IssueApprovals {
    /// Returns true when every gate required for delivery is signed off.
    ///
    /// Support sign-off is tracked but not required.
    pub fn approved(&self) -> bool {
        self.development && self.product && self.quality && self.experience && self.documentation
    }

    /// Builds approvals from gate display names ("Development", "Product", ...).
    ///
    /// Unknown names are ignored.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut approvals = IssueApprovals::default();
        for name in names {
            match name.as_ref() {
                "Development" => approvals.development = true,
                "Product" => approvals.product = true,
                "Quality" => approvals.quality = true,
                "Experience" => approvals.experience = true,
                "Documentation" => approvals.documentation = true,
                "Support" => approvals.support = true,
                _ => {}
            }
        }
        approvals
    }
}

/// A comment with parsed timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub raw: RawComment,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Comment {
    /// Parses the raw comment's timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`] if either timestamp is unparseable.
    pub fn from_raw(raw: RawComment) -> Result<Self> {
        let created = parse_timestamp(&raw.created)?;
        let updated = parse_timestamp(&raw.updated)?;
        Ok(Comment {
            raw,
            created,
            updated,
        })
    }

    pub fn body(&self) -> &str {
        &self.raw.body
    }
}

/// Parses a tracker timestamp in Jira's format or RFC 3339.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_str(value, JIRA_TIMESTAMP_FORMAT) {
        return Ok(ts.with_timezone(&Utc));
    }
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| Error::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// A tracker issue extended with project-specific facts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Issue {
    /// The record as fetched from the tracker.
    pub raw: RawIssue,
    /// Browser URL of the issue.
    pub link: String,
    /// Browser URL of the parent issue, if any.
    pub parent_link: String,
    /// Issues linked from this one.
    pub linked_issues: IssueCollection,
    /// Effort estimate; [`NO_STORY_POINTS`] when not estimated.
    pub story_points: i32,
    pub approvals: IssueApprovals,
    pub qa_contact: String,
    /// Acceptance criteria text.
    pub acceptance: String,
    /// Delivery owner user name.
    pub owner: String,
    /// Flagged as impeded.
    pub impediment: bool,
    pub comments: Vec<Comment>,
}

impl Issue {
    /// Wraps a raw record with every derived attribute at its default.
    pub fn new(raw: RawIssue) -> Self {
        Issue {
            raw,
            ..Issue::default()
        }
    }

    pub fn key(&self) -> &str {
        &self.raw.key
    }

    pub fn summary(&self) -> &str {
        &self.raw.fields.summary
    }

    /// Returns the status if it belongs to the project vocabulary.
    pub fn status(&self) -> Option<IssueStatus> {
        self.raw.status_name()?.parse().ok()
    }

    /// Returns the issue type if it belongs to the project vocabulary.
    pub fn issue_type(&self) -> Option<IssueType> {
        self.raw.type_name()?.parse().ok()
    }

    /// Returns true if the issue is currently being worked on.
    pub fn is_active(&self) -> bool {
        self.status().is_some_and(|status| status.is_active())
    }

    /// Returns true if the issue is of the given type.
    pub fn is_type(&self, issue_type: IssueType) -> bool {
        self.raw.type_name() == Some(issue_type.as_str())
    }

    /// Returns true if a status is set and equals `status`.
    pub fn in_status(&self, status: IssueStatus) -> bool {
        self.raw.status_name() == Some(status.as_str())
    }

    /// Returns true if the resolution is Done.
    pub fn is_resolved(&self) -> bool {
        matches!(
            self.raw.resolution_name().map(str::parse::<IssueResolution>),
            Some(Ok(IssueResolution::Done))
        )
    }

    /// Returns true unless the priority is explicitly blank or Unprioritized.
    ///
    /// An issue without a priority field at all counts as prioritized.
    pub fn is_prioritized(&self) -> bool {
        match self.raw.priority_name() {
            None => true,
            Some("") => false,
            Some(name) => !matches!(
                name.parse::<IssuePriority>(),
                Ok(IssuePriority::Unprioritized)
            ),
        }
    }

    /// Returns true if the issue has been estimated.
    pub fn has_story_points(&self) -> bool {
        self.story_points > NO_STORY_POINTS
    }

    /// Returns true if the issue lists a component with exactly this name.
    pub fn has_component(&self, component: &str) -> bool {
        match &self.raw.fields.components {
            None => false,
            Some(components) => components.iter().any(|c| c.name == component),
        }
    }

    /// Sets the browser link (builder pattern).
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Sets the parent link (builder pattern).
    pub fn with_parent_link(mut self, link: impl Into<String>) -> Self {
        self.parent_link = link.into();
        self
    }

    /// Sets the linked issues (builder pattern).
    pub fn with_linked_issues(mut self, linked: IssueCollection) -> Self {
        self.linked_issues = linked;
        self
    }

    /// Sets the story points (builder pattern).
    pub fn with_story_points(mut self, points: i32) -> Self {
        self.story_points = points;
        self
    }

    /// Sets the approvals (builder pattern).
    pub fn with_approvals(mut self, approvals: IssueApprovals) -> Self {
        self.approvals = approvals;
        self
    }

    /// Sets the QA contact (builder pattern).
    pub fn with_qa_contact(mut self, contact: impl Into<String>) -> Self {
        self.qa_contact = contact.into();
        self
    }

    /// Sets the acceptance criteria (builder pattern).
    pub fn with_acceptance(mut self, acceptance: impl Into<String>) -> Self {
        self.acceptance = acceptance.into();
        self
    }

    /// Sets the owner (builder pattern).
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Sets the impediment flag (builder pattern).
    pub fn with_impediment(mut self, impediment: bool) -> Self {
        self.impediment = impediment;
        self
    }

    /// Sets the comments (builder pattern).
    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }
}

impl From<RawIssue> for Issue {
    fn from(raw: RawIssue) -> Self {
        Issue::new(raw)
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
