//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `bib-assigner` command-line tool. Each subcommand is defined in its own
//! file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `bib_assigner` library.
//!
//! Both commands take the same run inputs, collected by [`InputArgs`].

pub mod assign;
pub mod validate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use bib_assigner::config::{self, RunConfig, RunSettings, DEFAULT_CONFIG_FILE};
use bib_assigner::entry::HomeOrg;

/// Run inputs shared by every command
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Path to a run configuration file.
    ///
    /// Defaults to `.bib-assigner.yaml` in the current directory when that
    /// file exists. Flags given on the command line override its values.
    #[arg(short, long, value_name = "FILE", env = "BIB_ASSIGNER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Organization whose bibs are authoritative
    #[arg(long, value_enum, value_name = "ORG")]
    pub home_org: Option<HomeOrg>,

    /// CSV file of loaner bibs with `Slot` and `Bib` columns
    #[arg(short, long, value_name = "FILE")]
    pub loaners: Option<PathBuf>,

    /// Directory for processed race files and the run log
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Race day CSV files, in race order
    #[arg(value_name = "RACE_DAY")]
    pub race_days: Vec<PathBuf>,
}

impl InputArgs {
    /// Combine the configuration file (if any) with command-line flags.
    pub fn resolve(self) -> Result<RunConfig> {
        let file_settings = match &self.config {
            Some(path) => config::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    config::from_file(&default)?
                } else {
                    RunSettings::default()
                }
            }
        };

        let flags = RunSettings {
            home_org: self.home_org,
            loaner_bibs: self.loaners,
            race_days: self.race_days,
            output_dir: self.output,
        };

        Ok(file_settings.merge(flags).into_run_config()?)
    }
}
