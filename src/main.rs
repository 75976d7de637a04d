//! # Bib Assigner CLI
//!
//! This is the binary entry point for the `bib-assigner` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Handling top-level application errors and translating them into user-friendly
//!   output.
//!
//! The assignment logic lives in the `bib_assigner` library crate; the binary
//! only collects inputs and reports results.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
