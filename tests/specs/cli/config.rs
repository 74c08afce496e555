// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for configuration lookup.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn config_from_environment() {
    let fixture = Fixture::new();
    tally()
        .env("TALLY_CONFIG", &fixture.config)
        .args(["summary"])
        .arg(&fixture.export)
        .assert()
        .success()
        .stdout(predicate::str::contains("story points:  10"));
}

#[test]
fn explicit_config_wins_over_environment() {
    let fixture = Fixture::new();
    let empty = fixture.temp.path().join("empty.toml");
    std::fs::write(&empty, "").unwrap();

    // Without a field mapping nothing carries story points.
    tally()
        .env("TALLY_CONFIG", &fixture.config)
        .arg("summary")
        .arg(&fixture.export)
        .arg("-c")
        .arg(&empty)
        .assert()
        .success()
        .stdout(predicate::str::contains("story points:  0"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let fixture = Fixture::new();
    tally()
        .arg("summary")
        .arg(&fixture.export)
        .arg("--config")
        .arg(fixture.temp.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn missing_environment_config_is_an_error() {
    let fixture = Fixture::new();
    tally()
        .env("TALLY_CONFIG", fixture.temp.path().join("nope.toml"))
        .arg("summary")
        .arg(&fixture.export)
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn invalid_base_url_is_rejected() {
    let fixture = Fixture::new();
    std::fs::write(&fixture.config, "base_url = \"issues.example.com\"\n").unwrap();
    fixture
        .run("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid base_url"));
}

#[test]
fn malformed_toml_is_rejected() {
    let fixture = Fixture::new();
    std::fs::write(&fixture.config, "[fields\n").unwrap();
    fixture
        .run("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("toml error"));
}

#[test]
fn blank_field_id_is_rejected() {
    let fixture = Fixture::new();
    std::fs::write(&fixture.config, "[fields]\nstory_points = \" \"\n").unwrap();
    fixture
        .run("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("fields.story_points cannot be empty"));
}

#[test]
fn trailing_slash_in_base_url_is_trimmed() {
    let fixture = Fixture::new();
    fixture
        .run("list")
        .args(["-o", "json", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"link\": \"https://issues.example.com/browse/PROJ-1\"",
        ));
}
