// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for global flags, help and shell completion.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[parameterized(
    short = { "-v" },
    upper = { "-V" },
    long = { "--version" },
)]
fn version_flag(flag: &str) {
    tally()
        .arg(flag)
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_commands() {
    tally()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn list_help_shows_filter_reference() {
    tally()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--with-points"))
        .stdout(predicate::str::contains(
            "Statuses: Done, Obsolete, In Progress",
        ));
}

#[parameterized(
    bash = { "bash", "_tally" },
    zsh = { "zsh", "#compdef tally" },
    fish = { "fish", "complete -c tally" },
)]
fn completion_scripts(shell: &str, marker: &str) {
    tally()
        .args(["completion", shell])
        .assert()
        .success()
        .stdout(predicate::str::contains(marker));
}

#[test]
fn unknown_command_fails() {
    tally().arg("report").assert().failure();
}
