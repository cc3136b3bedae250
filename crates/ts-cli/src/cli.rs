//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tab-delimited timesheet reporter.
///
/// Reads a timesheet of clock times and nested category labels and
/// prints a tree of accumulated durations with a grand total.
#[derive(Debug, Parser)]
#[command(name = "ts", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Aggregate a timesheet and print the report.
    Report {
        /// The timesheet file to read.
        file: PathBuf,

        /// Emit the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate a timesheet and list problem lines.
    Check {
        /// The timesheet file to read.
        file: PathBuf,
    },
}
