//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand. It loads the loaner bib
//! pool and every race day exactly as `assign` would, so malformed files are
//! caught before a real run, and reports what it found.
//!
//! This command is a read-only operation that does not resolve bibs or write
//! any files.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use bib_assigner::logging;
use bib_assigner::run::load_inputs;

use super::InputArgs;

/// Check that the run inputs load cleanly
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
}

/// Execute the `validate` command.
pub fn execute(mut args: ValidateArgs, log_level: &str) -> Result<()> {
    logging::init(log_level, None);
    // Nothing is written, so no output directory is needed.
    args.inputs.output.get_or_insert_with(|| PathBuf::from("."));
    let config = args.inputs.resolve()?;

    println!("🔍 Validating inputs (home organization: {})", config.home_org);

    let (pool, days) = match load_inputs(&config) {
        Ok(loaded) => loaded,
        Err(e) => {
            println!("❌ {}", e);
            return Err(anyhow::anyhow!("Validation failed: {}", e));
        }
    };

    println!("✅ Loaner bibs: {}", pool.len());
    let mut competitors = 0;
    for day in &days {
        let with_home_bib = day
            .entries
            .iter()
            .filter(|e| !e.home_bib(config.home_org).is_empty())
            .count();
        competitors += day.entries.len();
        println!(
            "✅ {}: {} competitors, {} with a home bib",
            day.name(),
            day.entries.len(),
            with_home_bib
        );
    }
    println!(
        "\n📊 {} race days, {} competitor entries",
        days.len(),
        competitors
    );

    Ok(())
}
