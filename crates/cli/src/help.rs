// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text styling.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Filter reference shown after the help of filtering commands.
pub fn filters() -> &'static str {
    "\
Filters:
  Comma-separated values are OR'd; repeated flags and distinct flags are AND'd.
  Types:    Initiative, Epic, Story, Task
  Statuses: Done, Obsolete, In Progress, Feature Complete, Code Review, QE Review"
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
