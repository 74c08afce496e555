// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the `tally summary` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn summary_counts_everything() {
    let fixture = Fixture::new();
    fixture.run("summary").assert().success().stdout(
        "\
issues:        4
with points:   3
story points:  10
active:        2
resolved:      1
unprioritized: 1
approved:      1
impeded:       1
",
    );
}

#[test]
fn summary_with_type_filter() {
    let fixture = Fixture::new();
    fixture
        .run("summary")
        .args(["-t", "Story"])
        .assert()
        .success()
        .stdout(predicate::str::contains("filters: type=Story"))
        .stdout(predicate::str::contains("issues:        2"))
        .stdout(predicate::str::contains("story points:  5"));
}

#[test]
fn summary_with_or_filter() {
    let fixture = Fixture::new();
    fixture
        .run("summary")
        .args(["--type", "Story,Task", "--with-points"])
        .assert()
        .success()
        .stdout(predicate::str::contains("issues:        3"))
        .stdout(predicate::str::contains("story points:  10"));
}

#[test]
fn summary_with_and_filter() {
    let fixture = Fixture::new();
    fixture
        .run("summary")
        .args(["--type", "Story", "--type", "Task"])
        .assert()
        .success()
        .stdout(predicate::str::contains("issues:        0"))
        .stdout(predicate::str::contains("story points:  0"));
}

#[test]
fn summary_json() {
    let fixture = Fixture::new();
    let output = fixture
        .run("summary")
        .args(["--active", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["issues"], 2);
    assert_eq!(json["story_points"], 3);
    assert_eq!(json["impeded"], 1);
    assert_eq!(json["filters_applied"], serde_json::json!(["active"]));
}

#[test]
fn summary_reads_stdin() {
    let fixture = Fixture::new();
    tally()
        .args(["summary", "-", "-c"])
        .arg(&fixture.config)
        .write_stdin(EXPORT)
        .assert()
        .success()
        .stdout(predicate::str::contains("issues:        4"));
}

#[test]
fn summary_accepts_bare_array() {
    let fixture = Fixture::with_export(r#"[{ "key": "PROJ-9", "fields": { "customfield_10002": 8 } }]"#);
    fixture
        .run("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("story points:  8"));
}

#[test]
fn summary_of_empty_export() {
    let fixture = Fixture::with_export(r#"{ "issues": [] }"#);
    fixture
        .run("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("issues:        0"));
}

#[test]
fn summary_rejects_unknown_status() {
    let fixture = Fixture::new();
    fixture
        .run("summary")
        .args(["-s", "Closed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid status: 'Closed'"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn summary_rejects_lowercase_type() {
    let fixture = Fixture::new();
    fixture
        .run("summary")
        .args(["-t", "story"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid issue type: 'story'"));
}

#[test]
fn summary_rejects_malformed_export() {
    let fixture = Fixture::with_export(r#"{ "total": 0 }"#);
    fixture
        .run("summary")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: invalid export"))
        .stderr(predicate::str::contains("missing 'issues' array"));
}

#[test]
fn summary_missing_export() {
    let fixture = Fixture::new();
    tally()
        .arg("summary")
        .arg(fixture.temp.path().join("missing.json"))
        .arg("-c")
        .arg(&fixture.config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn summary_id_lists_matching_keys() {
    let fixture = Fixture::new();
    fixture
        .run("summary")
        .args(["--active", "-o", "id"])
        .assert()
        .success()
        .stdout("PROJ-1\nPROJ-3\n");
}
