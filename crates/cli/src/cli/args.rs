// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` so every reporting
//! command accepts the same filters.

use clap::Args;

/// Issue filter arguments.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Filter by type (comma-separated for OR, repeat for AND)
    #[arg(long, short = 't')]
    pub r#type: Vec<String>,

    /// Filter by status (comma-separated for OR, repeat for AND)
    #[arg(long, short)]
    pub status: Vec<String>,

    /// Filter by component (comma-separated for OR, repeat for AND)
    #[arg(long)]
    pub component: Vec<String>,

    /// Only issues being worked on (In Progress, Feature Complete, Code Review, QE Review)
    #[arg(long)]
    pub active: bool,

    /// Only issues resolved as Done
    #[arg(long, conflicts_with = "unresolved")]
    pub resolved: bool,

    /// Only issues not resolved as Done
    #[arg(long)]
    pub unresolved: bool,

    /// Only issues whose priority is blank or Unprioritized
    #[arg(long)]
    pub unprioritized: bool,

    /// Only issues with story points
    #[arg(long)]
    pub with_points: bool,

    /// Only issues with every required approval
    #[arg(long)]
    pub approved: bool,

    /// Only issues flagged as impeded
    #[arg(long)]
    pub impeded: bool,
}

/// Limit arguments for listed results.
#[derive(Args, Clone, Debug, Default)]
pub struct LimitArgs {
    /// Maximum number of results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}
