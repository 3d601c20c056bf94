//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the ghprops binary.

use clap::{Parser, Subcommand};

use crate::{CustomPropertyValue, RepoRef};

/// GitHub repository custom properties command-line interface.
#[derive(Parser, Debug)]
#[command(name = "ghprops", about = "GitHub custom property values CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Log requests to stderr (repeat for more detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show all custom property values set on a repository.
    Get {
        /// Repository as owner/repo.
        repo: RepoRef,
    },

    /// Create or update custom property values on a repository.
    Set {
        /// Repository as owner/repo.
        repo: RepoRef,

        /// Values to set as NAME=VALUE. `NAME=` sends an empty string.
        #[arg(value_parser = parse_assignment)]
        values: Vec<CustomPropertyValue>,

        /// Property names whose values should be removed.
        #[arg(long = "unset", value_name = "NAME")]
        unset: Vec<String>,
    },
}

impl Command {
    /// Properties to send for a `set` command, assignments first.
    ///
    /// Returns an empty list for other commands.
    pub fn properties(&self) -> Vec<CustomPropertyValue> {
        match self {
            Command::Set { values, unset, .. } => values
                .iter()
                .cloned()
                .chain(unset.iter().map(CustomPropertyValue::unset))
                .collect(),
            Command::Get { .. } => Vec::new(),
        }
    }
}

/// Parse `NAME=VALUE` into a property value.
pub fn parse_assignment(s: &str) -> Result<CustomPropertyValue, String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok(CustomPropertyValue::set(name, value)),
        Some(_) => Err(format!("missing property name in '{s}'")),
        None => Err(format!("expected NAME=VALUE, got '{s}'")),
    }
}
