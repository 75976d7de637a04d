//! A single race day: the records of one input file plus the lines that
//! precede them.

use std::path::{Path, PathBuf};

use crate::entry::RaceEntry;

/// Number of leading lines in a race-day file that are not competitor data.
pub const HEADER_LINES: usize = 2;

/// The contents of one race-day file.
///
/// Record order is the order of the source file and is preserved on output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceDay {
    /// Where the day was loaded from.
    pub source: PathBuf,
    /// Leading lines, passed through to the output verbatim.
    pub header_lines: Vec<Vec<String>>,
    pub entries: Vec<RaceEntry>,
}

impl RaceDay {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// The source file name without its extension.
    pub fn name(&self) -> String {
        self.source
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Where the processed copy of this day is written inside `output_dir`.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("processed - {}.csv", self.name()))
    }
}
