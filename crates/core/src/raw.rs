// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raw issue records as returned by the Jira REST API.
//!
//! These types mirror the wire JSON closely and carry no project semantics.
//! Optional objects stay `Option` so classification can tell "absent" apart
//! from "present but empty". Fields this crate does not model (custom
//! fields in particular) are kept verbatim in [`IssueFields::extra`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An issue exactly as the tracker reports it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawIssue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    pub key: String,
    /// REST resource URL of the issue.
    #[serde(
        rename = "self",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub self_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: IssueFields,
}

/// The `fields` object of a raw issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueFields {
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    /// Plain-text description. Rich-text documents read as `None`.
    #[serde(
        default,
        deserialize_with = "or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Named>,
    #[serde(rename = "issuetype", default, skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<Named>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Named>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Named>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<RawIssue>>,
    #[serde(
        rename = "issuelinks",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub issue_links: Vec<IssueLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentPage>,
    /// Every other field, keyed by its Jira id (e.g. `customfield_10002`).
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A named reference such as a status, issue type, resolution or priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl Named {
    pub fn new(name: impl Into<String>) -> Self {
        Named {
            id: None,
            name: name.into(),
        }
    }
}

/// A project component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Component {
            id: None,
            name: name.into(),
        }
    }
}

/// A tracker user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

/// A link between two issues. Exactly one side is normally populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub link_type: IssueLinkType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inward_issue: Option<Box<RawIssue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outward_issue: Option<Box<RawIssue>>,
}

impl IssueLink {
    /// Returns the issue on the other end of the link.
    pub fn linked_issue(&self) -> Option<&RawIssue> {
        self.inward_issue
            .as_deref()
            .or(self.outward_issue.as_deref())
    }
}

/// Link type with its inward/outward descriptions ("blocks", "is blocked by").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLinkType {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inward: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub outward: String,
}

/// The `comment` field: one page of comments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<RawComment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// A comment with unparsed timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
    /// Plain-text body. Rich-text documents read as empty.
    #[serde(default, deserialize_with = "or_default")]
    pub body: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated: String,
}

/// Reads `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads any value of an unexpected shape, `null` included, as the type's default.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

impl RawIssue {
    /// Creates a record with only a key; every field is absent.
    pub fn new(key: impl Into<String>) -> Self {
        RawIssue {
            key: key.into(),
            ..RawIssue::default()
        }
    }

    /// Parses a single issue from its JSON representation.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn status_name(&self) -> Option<&str> {
        self.fields.status.as_ref().map(|n| n.name.as_str())
    }

    pub fn type_name(&self) -> Option<&str> {
        self.fields.issue_type.as_ref().map(|n| n.name.as_str())
    }

    pub fn resolution_name(&self) -> Option<&str> {
        self.fields.resolution.as_ref().map(|n| n.name.as_str())
    }

    pub fn priority_name(&self) -> Option<&str> {
        self.fields.priority.as_ref().map(|n| n.name.as_str())
    }

    /// Returns a custom field value. JSON `null` counts as absent.
    pub fn custom(&self, field: &str) -> Option<&Value> {
        self.fields.extra.get(field).filter(|v| !v.is_null())
    }

    /// Sets the status (builder pattern).
    pub fn with_status(mut self, name: impl Into<String>) -> Self {
        self.fields.status = Some(Named::new(name));
        self
    }

    /// Sets the issue type (builder pattern).
    pub fn with_type(mut self, name: impl Into<String>) -> Self {
        self.fields.issue_type = Some(Named::new(name));
        self
    }

    /// Sets the resolution (builder pattern).
    pub fn with_resolution(mut self, name: impl Into<String>) -> Self {
        self.fields.resolution = Some(Named::new(name));
        self
    }

    /// Sets the priority (builder pattern).
    pub fn with_priority(mut self, name: impl Into<String>) -> Self {
        self.fields.priority = Some(Named::new(name));
        self
    }

    /// Sets the component list (builder pattern).
    pub fn with_components<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.components = Some(names.into_iter().map(Component::new).collect());
        self
    }
}

#[cfg(test)]
#[path = "raw_tests.rs"]
mod tests;
