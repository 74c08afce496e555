// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tally-core: Jira issue model and aggregation.
//!
//! This crate layers project semantics (approvals, story points, delivery
//! ownership, linked issues) over raw Jira issue records, and provides
//! ordered issue collections that can be filtered by arbitrary predicates
//! and aggregated. Everything here is synchronous and read-only.

pub mod client;
pub mod collection;
pub mod error;
pub mod issue;
pub mod owner;
pub mod raw;
pub mod vocabulary;

pub use client::{check_response, translate_error, ClientError, ClientResponse, Response};
pub use collection::IssueCollection;
pub use error::{Error, Result};
pub use issue::{Comment, Issue, IssueApprovals, NO_STORY_POINTS};
pub use owner::extract_delivery_owner;
pub use raw::{Component, IssueFields, IssueLink, Named, RawComment, RawIssue, User};
pub use vocabulary::{IssuePriority, IssueResolution, IssueStatus, IssueType};
