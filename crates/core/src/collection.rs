// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered collections of issues with filtering and aggregation.
//!
//! Issues are held behind [`Arc`] so the same issue can sit in several
//! collections at once (a filtered view, a parent's linked issues) without
//! copying. Filtering always builds a new collection and leaves the source
//! untouched.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::issue::Issue;

/// An ordered group of issues.
///
/// Slots may be empty: [`IssueCollection::new`] pre-sizes the collection
/// and callers fill the slots with [`IssueCollection::set`]. Empty slots
/// count towards [`len`](IssueCollection::len) but never match a filter
/// and contribute nothing to aggregates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueCollection {
    slots: Vec<Option<Arc<Issue>>>,
}

impl IssueCollection {
    /// Creates a collection with `size` empty slots.
    pub fn new(size: usize) -> Self {
        IssueCollection {
            slots: vec![None; size],
        }
    }

    /// Returns the number of slots, including empty ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Appends an issue.
    pub fn push(&mut self, issue: impl Into<Arc<Issue>>) {
        self.slots.push(Some(issue.into()));
    }

    /// Fills the slot at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len()`.
    pub fn set(&mut self, index: usize, issue: impl Into<Arc<Issue>>) -> Result<()> {
        let len = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(issue.into());
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { index, len }),
        }
    }

    /// Returns the issue at `index`, or `None` if the slot is empty or past the end.
    pub fn get(&self, index: usize) -> Option<&Arc<Issue>> {
        self.slots.get(index)?.as_ref()
    }

    /// Iterates over the issues in order, skipping empty slots.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Issue>> + '_ {
        self.slots.iter().flatten()
    }

    /// Returns the issues for which `predicate` holds, in their original order.
    ///
    /// The predicate runs once per populated slot.
    pub fn filter_by<F>(&self, mut predicate: F) -> IssueCollection
    where
        F: FnMut(&Issue) -> bool,
    {
        let slots = self
            .iter()
            .filter(|issue| predicate(issue))
            .map(|issue| Some(Arc::clone(issue)))
            .collect();
        IssueCollection { slots }
    }

    /// Counts the issues for which `predicate` holds.
    pub fn count<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&Issue) -> bool,
    {
        self.iter().filter(|issue| predicate(issue)).count()
    }

    /// Sums the story points of every estimated issue.
    pub fn story_points(&self) -> i64 {
        self.iter()
            .filter(|issue| issue.has_story_points())
            .map(|issue| i64::from(issue.story_points))
            .sum()
    }

    /// Returns the keys of the issues in order.
    pub fn keys(&self) -> Vec<&str> {
        self.iter().map(|issue| issue.key()).collect()
    }
}

impl FromIterator<Issue> for IssueCollection {
    fn from_iter<I: IntoIterator<Item = Issue>>(iter: I) -> Self {
        IssueCollection {
            slots: iter.into_iter().map(|issue| Some(Arc::new(issue))).collect(),
        }
    }
}

impl FromIterator<Arc<Issue>> for IssueCollection {
    fn from_iter<I: IntoIterator<Item = Arc<Issue>>>(iter: I) -> Self {
        IssueCollection {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a IssueCollection {
    type Item = &'a Arc<Issue>;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Option<Arc<Issue>>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter().flatten()
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
