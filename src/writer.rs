//! Writing processed race days
//!
//! Each day is written to its own CSV file in the output directory: the two
//! header lines exactly as loaded, then every competitor in load order with
//! the decision column filled in.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Error, Result};
use crate::race_day::RaceDay;

/// Write one day into `output_dir`, creating the directory if needed.
///
/// Returns the path written. An existing file at that path is replaced.
pub fn write_day(day: &RaceDay, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| Error::Write {
        path: output_dir.to_path_buf(),
        message: format!("failed to create directory: {}", e),
    })?;

    let path = day.output_path(output_dir);
    let write_err = |e: &dyn std::fmt::Display| Error::Write {
        path: path.clone(),
        message: e.to_string(),
    };

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&path)
        .map_err(|e| write_err(&e))?;

    for line in &day.header_lines {
        writer.write_record(line).map_err(|e| write_err(&e))?;
    }
    for entry in &day.entries {
        writer.write_record(entry.to_row()).map_err(|e| write_err(&e))?;
    }
    writer.flush().map_err(|e| write_err(&e))?;

    info!("Wrote {} competitors to {}", day.entries.len(), path.display());
    Ok(path)
}

/// Write every day into `output_dir`, in order.
///
/// Stops at the first failure. Days written before it are left on disk.
pub fn write_days(days: &[RaceDay], output_dir: &Path) -> Result<Vec<PathBuf>> {
    days.iter().map(|day| write_day(day, output_dir)).collect()
}
