//! Reading race-day files and the loaner bib pool
//!
//! Race-day files are CSV with two leading lines that are not competitor data
//! (event details and column titles). Those lines are kept verbatim. Every
//! line after them must have exactly [`RaceEntry::FIELD_COUNT`] fields; a
//! single bad line rejects the whole file.
//!
//! Lines are expected to be UTF-8. A line that is not (typically a
//! spreadsheet export with accented names) is read as Windows-1252 instead,
//! with a warning naming the file and line.
//!
//! The loaner file is CSV with a `Slot` and a `Bib` column. Only the bib is
//! used, in file order.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ByteRecord;
use encoding_rs::WINDOWS_1252;
use log::{info, warn};
use serde::Deserialize;

use crate::entry::{clean_bib, RaceEntry};
use crate::error::{Error, Result};
use crate::loaner::LoanerPool;
use crate::race_day::{RaceDay, HEADER_LINES};

/// One row of the loaner bib file.
#[derive(Debug, Deserialize)]
struct LoanerRow {
    #[serde(rename = "Slot", default)]
    slot: String,
    #[serde(rename = "Bib")]
    bib: String,
}

/// Decode one CSV line into owned fields, falling back to Windows-1252 when
/// the line is not UTF-8.
fn decode_fields(record: &ByteRecord, source: &Path) -> Vec<String> {
    let utf8: std::result::Result<Vec<String>, _> = record
        .iter()
        .map(|field| std::str::from_utf8(field).map(str::to_string))
        .collect();
    if let Ok(fields) = utf8 {
        return fields;
    }

    warn!(
        "{} line {}: not valid UTF-8, reading it as Windows-1252",
        source.display(),
        line_number(record)
    );
    record
        .iter()
        .map(|field| WINDOWS_1252.decode_without_bom_handling(field).0.into_owned())
        .collect()
}

fn line_number(record: &ByteRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}

/// Parse a race day from `reader`. `source` identifies the day in errors and
/// in the output file name.
pub fn read_race_day<R: Read>(source: impl Into<PathBuf>, reader: R) -> Result<RaceDay> {
    let mut day = RaceDay::new(source);
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = csv_reader.byte_records();

    for found in 0..HEADER_LINES {
        match records.next() {
            Some(record) => {
                let record = record.map_err(|e| Error::load(&day.source, e))?;
                day.header_lines.push(decode_fields(&record, &day.source));
            }
            None => {
                return Err(Error::MissingHeader {
                    path: day.source.clone(),
                    found,
                })
            }
        }
    }

    for record in records {
        let record = record.map_err(|e| Error::load(&day.source, e))?;
        let fields = decode_fields(&record, &day.source);
        let entry = RaceEntry::from_row(&fields).ok_or_else(|| Error::FieldCount {
            path: day.source.clone(),
            line: line_number(&record),
            expected: RaceEntry::FIELD_COUNT,
            found: fields.len(),
        })?;
        day.entries.push(entry);
    }

    Ok(day)
}

/// Load a race day from disk.
pub fn load_race_day(path: &Path) -> Result<RaceDay> {
    let file = File::open(path).map_err(|e| Error::load(path, e))?;
    let day = read_race_day(path, file)?;
    info!(
        "Loaded {} competitors from {}",
        day.entries.len(),
        path.display()
    );
    Ok(day)
}

/// Load every race day, in the order given.
///
/// Fails on the first file that cannot be loaded; no partial series is
/// returned.
pub fn load_race_days<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RaceDay>> {
    paths.iter().map(|p| load_race_day(p.as_ref())).collect()
}

/// Parse the loaner bib pool from `reader`.
///
/// Blank bib cells are skipped so an empty slot is never issued.
pub fn read_loaner_pool<R: Read>(reader: R) -> Result<LoanerPool> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut bibs = Vec::new();
    for row in csv_reader.deserialize() {
        let row: LoanerRow = row?;
        let bib = clean_bib(&row.bib);
        if bib.is_empty() {
            warn!("Skipping loaner slot '{}' with no bib", row.slot);
            continue;
        }
        bibs.push(bib.to_string());
    }

    Ok(LoanerPool::new(bibs))
}

/// Load the loaner bib pool from disk.
pub fn load_loaner_pool(path: &Path) -> Result<LoanerPool> {
    let file = File::open(path).map_err(|e| Error::load(path, e))?;
    let pool = read_loaner_pool(file).map_err(|e| match e {
        Error::Csv(e) => Error::load(path, e),
        other => other,
    })?;
    info!("Loaded {} loaner bibs from {}", pool.len(), path.display());
    Ok(pool)
}
