//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Bib Assigner - Assign unique race bibs across a multi-day race series
#[derive(Parser, Debug)]
#[command(name = "bib-assigner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assign bibs for every race day and write the processed files
    Assign(commands::assign::AssignArgs),

    /// Load the loaner pool and race days and report problems without assigning
    Validate(commands::validate::ValidateArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Assign(args) => commands::assign::execute(args, &self.log_level),
            Commands::Validate(args) => commands::validate::execute(args, &self.log_level),
        }
    }
}
