// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the `tally list` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[test]
fn list_shows_every_issue() {
    let fixture = Fixture::new();
    fixture.run("list").assert().success().stdout(
        "\
PROJ-1 [Story] (In Progress) 3pt Checkout flow @jdoe
PROJ-2 [Task] (Done) 5pt Payment provider
PROJ-3 [Epic] (Code Review) 0pt Payments
PROJ-4 [Story] (Obsolete) 2pt Legacy cart
",
    );
}

#[parameterized(
    story = { &["-t", "Story"], "PROJ-1\nPROJ-4\n" },
    in_progress = { &["-s", "In Progress"], "PROJ-1\n" },
    active = { &["--active"], "PROJ-1\nPROJ-3\n" },
    resolved = { &["--resolved"], "PROJ-2\n" },
    unresolved = { &["--unresolved"], "PROJ-1\nPROJ-3\nPROJ-4\n" },
    unprioritized = { &["--unprioritized"], "PROJ-3\n" },
    with_points = { &["--with-points"], "PROJ-1\nPROJ-2\nPROJ-4\n" },
    approved = { &["--approved"], "PROJ-2\n" },
    impeded = { &["--impeded"], "PROJ-3\n" },
    component = { &["--component", "api"], "PROJ-4\n" },
    component_or = { &["--component", "api,ui"], "PROJ-1\nPROJ-4\n" },
    story_active = { &["-t", "Story", "--active"], "PROJ-1\n" },
    nothing = { &["-s", "QE Review"], "" },
)]
fn list_filters(args: &[&str], expected: &str) {
    let fixture = Fixture::new();
    fixture
        .run("list")
        .args(args)
        .args(["-o", "id"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected.to_string()));
}

#[test]
fn list_limit() {
    let fixture = Fixture::new();
    fixture
        .run("list")
        .args(["-n", "2", "-o", "ids"])
        .assert()
        .success()
        .stdout("PROJ-1\nPROJ-2\n");
}

#[test]
fn list_json_includes_links_and_owner() {
    let fixture = Fixture::new();
    let output = fixture
        .run("list")
        .args(["-t", "Story", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let issues = json["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0]["key"], "PROJ-1");
    assert_eq!(issues[0]["owner"], "jdoe");
    assert_eq!(
        issues[0]["link"],
        "https://issues.example.com/browse/PROJ-1"
    );
    assert_eq!(issues[0]["story_points"], 3);
    assert_eq!(issues[1]["status"], "Obsolete");
    assert_eq!(issues[1]["active"], false);
    assert_eq!(json["filters_applied"], serde_json::json!(["type=Story"]));
}

#[test]
fn list_resolved_conflicts_with_unresolved() {
    let fixture = Fixture::new();
    fixture
        .run("list")
        .args(["--resolved", "--unresolved"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn list_skips_bad_comments_with_warning() {
    let fixture = Fixture::with_export(
        r#"[{ "key": "PROJ-1", "fields": { "summary": "x", "comment": { "comments": [
            { "id": "7", "body": "hi", "created": "yesterday", "updated": "yesterday" }
        ]}}}]"#,
    );
    fixture
        .run("list")
        .assert()
        .success()
        .stdout("PROJ-1 [-] (-) 0pt x\n")
        .stderr(predicate::str::contains("skipping comment 7"));
}

#[test]
fn list_reads_rich_text_and_null_fields() {
    let fixture = Fixture::with_export(
        r#"[
            { "key": "PROJ-1", "fields": { "summary": "Cloud", "issuetype": { "name": "Story" },
                "description": { "type": "doc", "version": 1, "content": [] } } },
            { "key": "PROJ-2", "fields": { "summary": null, "issuelinks": null, "issuetype": { "name": "Task" } } },
            { "key": "PROJ-3", "fields": { "summary": "Server", "issuetype": { "name": "Story" },
                "description": "Delivery Owner: [~jdoe]" } }
        ]"#,
    );
    fixture.run("list").assert().success().stdout(
        "\
PROJ-1 [Story] (-) 0pt Cloud
PROJ-2 [Task] (-) 0pt 
PROJ-3 [Story] (-) 0pt Server @jdoe
",
    );
}
