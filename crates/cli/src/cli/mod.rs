// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{FilterArgs, LimitArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "ids")]
    Id,
}

#[derive(Parser)]
#[command(name = "tally")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Classify and aggregate exported Jira issues")]
#[command(
    long_about = "Classify and aggregate exported Jira issues.\n\n\
    Reads a Jira search export, derives story points, approvals and ownership \
    from the configured custom fields, then filters and totals the result."
)]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Path to the config file (default: $TALLY_CONFIG, then <config_dir>/tally/config.toml)
    #[arg(short = 'c', long = "config", global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Count matching issues and total their story points
    #[command(after_help = help::filters())]
    Summary {
        /// Jira export file (search response or array of issues), or - for stdin
        file: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List matching issues
    #[command(after_help = help::filters())]
    List {
        /// Jira export file (search response or array of issues), or - for stdin
        file: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        limit: LimitArgs,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
