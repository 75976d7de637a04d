//! Assign command implementation
//!
//! The assign command runs the whole pipeline:
//! 1. Load the loaner bib pool
//! 2. Load every race day
//! 3. Resolve bibs across the series
//! 4. Write `processed - <day>.csv` for each day, plus a run log

use std::time::Instant;

use anyhow::Result;
use clap::Args;

use bib_assigner::entry::Decision;
use bib_assigner::logging;
use bib_assigner::run::execute_run;

use super::InputArgs;

/// Arguments for the assign command
#[derive(Args, Debug)]
pub struct AssignArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Resolve and report without writing any files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress the summary; errors are still reported
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the assign command
pub fn execute(args: AssignArgs, log_level: &str) -> Result<()> {
    let start_time = Instant::now();
    let started = chrono::Local::now();
    let config = args.inputs.resolve()?;

    let run_log = if args.dry_run {
        None
    } else {
        let (_, file) = logging::open_run_log(&config.output_dir, started)?;
        Some(file)
    };
    logging::init(log_level, run_log);

    let report = match execute_run(&config, args.dry_run) {
        Ok(report) => report,
        Err(e) => {
            log::error!("{}", e);
            if !args.quiet {
                println!("❌ Bib assignment failed");
            }
            return Err(e.into());
        }
    };

    if !args.quiet {
        println!(
            "✅ Assigned bibs for {} records across {} days in {:.2}s",
            report.summary.total(),
            report.days.len(),
            start_time.elapsed().as_secs_f64()
        );
        for decision in Decision::ALL {
            println!("   {}: {}", decision, report.summary.count(decision));
        }
        println!("   Loaner bibs remaining: {}", report.loaners_remaining);

        if args.dry_run {
            println!("🔎 Dry run - no files written");
        } else {
            println!("   Files written to: {}", config.output_dir.display());
        }
    }

    Ok(())
}
