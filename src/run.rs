//! Orchestrator for a complete bib assignment run
//!
//! This module ties the stages of a run together:
//! 1. Load the loaner bib pool
//! 2. Load every race day (all of them, or none)
//! 3. Resolve bibs across the whole series
//! 4. Write each processed day (skipped for a dry run)
//!
//! A failure at any stage stops the run. Nothing is written unless resolution
//! completed for every day.

use std::path::PathBuf;

use log::info;

use crate::config::RunConfig;
use crate::error::Result;
use crate::loader::{load_loaner_pool, load_race_days};
use crate::loaner::LoanerPool;
use crate::race_day::RaceDay;
use crate::resolver::{BibResolver, ResolutionSummary};
use crate::writer::write_days;

/// What a finished run did.
#[derive(Debug)]
pub struct RunReport {
    pub summary: ResolutionSummary,
    /// The resolved days, in load order.
    pub days: Vec<RaceDay>,
    /// Loaner bibs left unissued.
    pub loaners_remaining: usize,
    /// Files written; empty for a dry run.
    pub written: Vec<PathBuf>,
}

/// Load only: read the pool and every race day without resolving.
pub fn load_inputs(config: &RunConfig) -> Result<(LoanerPool, Vec<RaceDay>)> {
    let pool = load_loaner_pool(&config.loaner_bibs)?;
    let days = load_race_days(&config.race_days)?;
    Ok((pool, days))
}

/// Execute a run. When `dry_run` is set the resolved days are returned but
/// not written.
pub fn execute_run(config: &RunConfig, dry_run: bool) -> Result<RunReport> {
    info!("Home organization: {}", config.home_org);

    let (pool, mut days) = load_inputs(config)?;

    let mut resolver = BibResolver::new(config.home_org, pool);
    let summary = resolver.resolve(&mut days)?;
    info!("Resolved {} records ({})", summary.total(), summary);

    let written = if dry_run {
        Vec::new()
    } else {
        write_days(&days, &config.output_dir)?
    };

    Ok(RunReport {
        summary,
        days,
        loaners_remaining: resolver.pool().remaining(),
        written,
    })
}
