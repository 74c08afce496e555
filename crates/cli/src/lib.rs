// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tallyrs - classify and aggregate exported Jira issues.
//!
//! This crate provides the library behind the `tally` CLI. It reads a Jira
//! search export, derives project attributes through a configurable custom
//! field mapping, and filters and totals the result.
//!
//! # Main Components
//!
//! - [`Config`] - Base URL and custom field mapping
//! - [`load`] - Reading exports from files or stdin
//! - [`extract::Extractor`] - Derivation of [`tally_core::Issue`]s from raw records
//! - [`filter::IssueFilter`] - Grouped type/status/component and flag filters
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use tallyrs::{extract::Extractor, load::load_export, Config};
//!
//! let config = Config::resolve(None)?;
//! let issues = Extractor::new(&config).collection(load_export(Path::new("export.json"))?);
//! println!("{} story points", issues.story_points());
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod extract;
pub mod filter;
pub mod help;
pub mod load;
pub mod logging;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, FilterArgs, LimitArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config;
    match cli.command {
        Command::Summary {
            file,
            filter,
            output,
        } => {
            let config = Config::resolve(config_path.as_deref())?;
            commands::summary::run(&config, &file, &filter, output)
        }
        Command::List {
            file,
            filter,
            limit,
            output,
        } => {
            let config = Config::resolve(config_path.as_deref())?;
            commands::list::run(&config, &file, &filter, limit.limit, output)
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "tally", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
