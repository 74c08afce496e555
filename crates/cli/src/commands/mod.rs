// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod list;
pub mod summary;

use std::path::Path;

use tally_core::IssueCollection;

use crate::config::Config;
use crate::error::Result;
use crate::extract::Extractor;
use crate::filter::IssueFilter;
use crate::load::load_export;

/// Helper to load and derive every issue in an export file.
pub fn load_issues(config: &Config, file: &Path) -> Result<IssueCollection> {
    let raws = load_export(file)?;
    Ok(Extractor::new(config).collection(raws))
}

/// Applies `filter` and logs how many issues survived.
pub(crate) fn select(issues: &IssueCollection, filter: &IssueFilter) -> IssueCollection {
    let selected = filter.apply(issues);
    tracing::debug!(
        "{} of {} issues match [{}]",
        selected.count(|_| true),
        issues.count(|_| true),
        filter.describe().join(" ")
    );
    selected
}

#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
