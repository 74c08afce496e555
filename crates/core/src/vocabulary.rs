// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project vocabularies for issue classification.
//!
//! Jira reports types, statuses, resolutions and priorities as display
//! names. Each vocabulary here is closed and matched case-sensitively
//! against those names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Classification of issues by their nature and scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueType {
    /// Top-level business objective grouping several epics.
    Initiative,
    /// Large body of work split into stories.
    Epic,
    /// User-facing unit of work, usually estimated in story points.
    Story,
    /// Technical unit of work.
    Task,
}

impl IssueType {
    /// Returns the Jira display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Initiative => "Initiative",
            IssueType::Epic => "Epic",
            IssueType::Story => "Story",
            IssueType::Task => "Task",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Initiative" => Ok(IssueType::Initiative),
            "Epic" => Ok(IssueType::Epic),
            "Story" => Ok(IssueType::Story),
            "Task" => Ok(IssueType::Task),
            _ => Err(Error::InvalidIssueType(s.to_string())),
        }
    }
}

/// Workflow status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueStatus {
    Done,
    Obsolete,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Feature Complete")]
    FeatureComplete,
    #[serde(rename = "Code Review")]
    CodeReview,
    #[serde(rename = "QE Review")]
    QeReview,
}

impl IssueStatus {
    /// Returns the Jira display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Done => "Done",
            IssueStatus::Obsolete => "Obsolete",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::FeatureComplete => "Feature Complete",
            IssueStatus::CodeReview => "Code Review",
            IssueStatus::QeReview => "QE Review",
        }
    }

    /// Returns true if work on the issue is under way.
    pub fn is_active(&self) -> bool {
        match self {
            IssueStatus::InProgress
            | IssueStatus::FeatureComplete
            | IssueStatus::CodeReview
            | IssueStatus::QeReview => true,
            IssueStatus::Done | IssueStatus::Obsolete => false,
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Done" => Ok(IssueStatus::Done),
            "Obsolete" => Ok(IssueStatus::Obsolete),
            "In Progress" => Ok(IssueStatus::InProgress),
            "Feature Complete" => Ok(IssueStatus::FeatureComplete),
            "Code Review" => Ok(IssueStatus::CodeReview),
            "QE Review" => Ok(IssueStatus::QeReview),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Resolution recorded when an issue is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueResolution {
    Done,
}

impl IssueResolution {
    /// Returns the Jira display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueResolution::Done => "Done",
        }
    }
}

impl fmt::Display for IssueResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueResolution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Done" => Ok(IssueResolution::Done),
            _ => Err(Error::InvalidResolution(s.to_string())),
        }
    }
}

/// Priority values that carry project meaning.
///
/// Only the explicit "not yet triaged" priority matters for
/// classification; every other priority name counts as prioritized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssuePriority {
    Unprioritized,
}

impl IssuePriority {
    /// Returns the Jira display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssuePriority::Unprioritized => "Unprioritized",
        }
    }
}

impl fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssuePriority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Unprioritized" => Ok(IssuePriority::Unprioritized),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "vocabulary_tests.rs"]
mod tests;
