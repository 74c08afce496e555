// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Field mapping matching [`EXPORT`].
pub const CONFIG: &str = r#"
base_url = "https://issues.example.com/"

[fields]
story_points = "customfield_10002"
approvals = "customfield_12310"
qa_contact = "customfield_12315"
impediment = "customfield_12313"
"#;

/// A search response with four issues:
///
/// - PROJ-1 Story, In Progress, 3pt, delivery owner jdoe, component ui
/// - PROJ-2 Task, Done (resolved), 5pt, every required approval
/// - PROJ-3 Epic, Code Review, impeded, Unprioritized
/// - PROJ-4 Story, Obsolete, 2pt, component api
pub const EXPORT: &str = r#"{
  "startAt": 0,
  "maxResults": 50,
  "total": 4,
  "issues": [
    {
      "id": "10001",
      "key": "PROJ-1",
      "fields": {
        "summary": "Checkout flow",
        "description": "h3. Scope\nDelivery Owner: [~jdoe]",
        "issuetype": { "name": "Story" },
        "status": { "name": "In Progress" },
        "components": [{ "name": "ui" }],
        "customfield_10002": 3.0,
        "customfield_12315": { "name": "qa1", "displayName": "Quinn Tester" }
      }
    },
    {
      "id": "10002",
      "key": "PROJ-2",
      "fields": {
        "summary": "Payment provider",
        "issuetype": { "name": "Task" },
        "status": { "name": "Done" },
        "resolution": { "name": "Done" },
        "priority": { "name": "Major" },
        "customfield_10002": 5,
        "customfield_12310": [
          { "value": "Development" }, { "value": "Product" }, { "value": "Quality" },
          { "value": "Experience" }, { "value": "Documentation" }
        ]
      }
    },
    {
      "id": "10003",
      "key": "PROJ-3",
      "fields": {
        "summary": "Payments",
        "issuetype": { "name": "Epic" },
        "status": { "name": "Code Review" },
        "priority": { "name": "Unprioritized" },
        "customfield_10002": null,
        "customfield_12313": [{ "value": "Impediment" }]
      }
    },
    {
      "id": "10004",
      "key": "PROJ-4",
      "fields": {
        "summary": "Legacy cart",
        "issuetype": { "name": "Story" },
        "status": { "name": "Obsolete" },
        "components": [{ "name": "api" }],
        "customfield_10002": 2
      }
    }
  ]
}"#;

/// `tally` with configuration and logging isolated from the host environment.
pub fn tally() -> Command {
    let mut cmd = cargo_bin_cmd!("tally");
    cmd.env_remove("TALLY_CONFIG")
        .env_remove("TALLY_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// A temp directory holding `export.json` and `config.toml`.
pub struct Fixture {
    pub temp: TempDir,
    pub export: PathBuf,
    pub config: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_export(EXPORT)
    }

    pub fn with_export(export: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let export_path = temp.path().join("export.json");
        let config_path = temp.path().join("config.toml");
        std::fs::write(&export_path, export).unwrap();
        std::fs::write(&config_path, CONFIG).unwrap();
        Fixture {
            temp,
            export: export_path,
            config: config_path,
        }
    }

    /// `tally <command> <export> -c <config>`.
    pub fn run(&self, command: &str) -> Command {
        let mut cmd = tally();
        cmd.arg(command)
            .arg(&self.export)
            .arg("-c")
            .arg(&self.config);
        cmd
    }
}
