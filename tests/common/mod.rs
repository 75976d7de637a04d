//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new()
//!         .with_loaners(&["901", "902"])
//!         .with_day("day1", &[rows::home("12", "E1", "Ann", "Lee")]);
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::rows;
    pub use super::TestFixture;
}

/// The two leading lines of every race-day file used in tests.
pub const DAY_HEADER: &str = "Saturday GS,Mount Snow,,,,,,,,,,,,\n\
NEMS Bib,MID Bib,USSA,FIS,First,Last,YOB,Gender,Team,Registered,USSA Membership,NASTAR,Season Pass,Notes\n";

/// Race-day data lines in the fourteen-column layout. Home bibs are
/// Mid-Atlantic bibs, the default home organization.
#[allow(dead_code)]
pub mod rows {
    /// A competitor with a Mid-Atlantic bib.
    pub fn home(bib: &str, id: &str, first: &str, last: &str) -> String {
        format!(",{bib},{id},,{first},{last},1970,F,Team,,,,,\n")
    }

    /// A competitor with only a New England bib.
    pub fn away(bib: &str, id: &str, first: &str, last: &str) -> String {
        format!("{bib},,{id},,{first},{last},1970,F,Team,,,,,\n")
    }

    /// A competitor with no bib at all.
    pub fn none(id: &str, first: &str, last: &str) -> String {
        format!(",,{id},,{first},{last},1970,F,Team,,,,,\n")
    }
}

/// A temporary directory holding a loaner file and race-day files.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    days: Vec<PathBuf>,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
            days: Vec::new(),
        }
    }

    /// Write `loaners.csv` with one slot per bib.
    pub fn with_loaners(self, bibs: &[&str]) -> Self {
        let mut content = String::from("Slot,Bib\n");
        for (slot, bib) in bibs.iter().enumerate() {
            content.push_str(&format!("{},{}\n", slot + 1, bib));
        }
        self.with_file("loaners.csv", &content)
    }

    /// Write `<name>.csv` with the standard header and the given data lines,
    /// and remember it as the next race day.
    pub fn with_day(mut self, name: &str, lines: &[String]) -> Self {
        let file_name = format!("{name}.csv");
        self = self.with_file(&file_name, &format!("{}{}", DAY_HEADER, lines.concat()));
        self.days.push(self.temp_dir.path().join(file_name));
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// The output directory used by [`Self::assign`].
    pub fn output_dir(&self) -> PathBuf {
        self.temp_dir.path().join("out")
    }

    /// Read a processed day from the output directory.
    #[allow(dead_code)]
    pub fn processed(&self, name: &str) -> String {
        std::fs::read_to_string(self.output_dir().join(format!("processed - {name}.csv")))
            .expect("Failed to read processed file")
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("bib-assigner");
        cmd.current_dir(self.path());
        cmd
    }

    /// An `assign` command over every day added so far.
    #[allow(dead_code)]
    pub fn assign(&self) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("assign")
            .arg("--loaners")
            .arg(self.path().join("loaners.csv"))
            .arg("--output")
            .arg(self.output_dir())
            .args(&self.days);
        cmd
    }

    /// A `validate` command over every day added so far.
    #[allow(dead_code)]
    pub fn validate(&self) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("validate")
            .arg("--loaners")
            .arg(self.path().join("loaners.csv"))
            .args(&self.days);
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_day() {
        let fixture = TestFixture::new().with_day("day1", &[rows::none("E1", "Ann", "Lee")]);
        let content = std::fs::read_to_string(fixture.path().join("day1.csv")).unwrap();
        assert!(content.starts_with("Saturday GS"));
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_rows_have_fourteen_fields() {
        for line in [
            rows::home("12", "E1", "Ann", "Lee"),
            rows::away("45", "E2", "Bea", "Cho"),
            rows::none("E3", "Cal", "Dunn"),
        ] {
            assert_eq!(line.trim_end().split(',').count(), 14);
        }
    }
}
