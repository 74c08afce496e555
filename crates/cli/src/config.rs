// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration management.
//!
//! Configuration is a TOML file and includes:
//! - `base_url`: Jira base URL used to build browser links (`{base_url}/browse/{key}`)
//! - `[fields]`: ids of the custom fields that carry story points, approvals,
//!   QA contact, acceptance criteria and the impediment flag
//!
//! The file is looked up in order: `--config`, `$TALLY_CONFIG`,
//! `<config_dir>/tally/config.toml`. The first two must exist; the last is
//! optional and defaults apply when it is absent.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "tally";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Tool configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Jira base URL, e.g. `https://issues.example.com`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Custom field mapping.
    #[serde(default)]
    pub fields: FieldMap,
}

/// Ids of the custom fields that carry project attributes.
///
/// A missing entry leaves the corresponding attribute at its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMap {
    /// Numeric story point estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_points: Option<String>,
    /// Multi-select of approval gate names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approvals: Option<String>,
    /// User picker for the QA contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qa_contact: Option<String>,
    /// Acceptance criteria text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptance: Option<String>,
    /// "Flagged" style field; any value marks the issue as impeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impediment: Option<String>,
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or fails validation.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Config::parse(&content)
    }

    /// Resolves and loads the configuration for this invocation.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file is missing or invalid.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match select_path(explicit, env::config_path(), default_config_path()) {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                Config::load(&path)
            }
            None => {
                tracing::debug!("no config file, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Checks values that TOML typing alone cannot.
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.base_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(Error::Config(format!(
                    "invalid base_url '{}': must start with http:// or https://",
                    url
                )));
            }
        }
        for (name, value) in self.fields.entries() {
            if value.is_some_and(|v| v.trim().is_empty()) {
                return Err(Error::Config(format!("fields.{} cannot be empty", name)));
            }
        }
        Ok(())
    }

    /// Returns the browser URL of an issue, or an empty string without a base URL.
    pub fn issue_link(&self, key: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}/browse/{}", base.trim_end_matches('/'), key),
            None => String::new(),
        }
    }
}

impl FieldMap {
    fn entries(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("story_points", self.story_points.as_deref()),
            ("approvals", self.approvals.as_deref()),
            ("qa_contact", self.qa_contact.as_deref()),
            ("acceptance", self.acceptance.as_deref()),
            ("impediment", self.impediment.as_deref()),
        ]
    }
}

/// Returns `<config_dir>/tally/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Picks the config file to load.
///
/// Explicit and environment paths are returned as-is so a missing file is
/// reported; the default path is only used when it exists.
fn select_path(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    default: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = from_env {
        return Some(path);
    }
    default.filter(|path| path.exists())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
