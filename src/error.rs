//! # Error Handling
//!
//! This module defines the centralized error type for `bib-assigner`. It uses
//! the `thiserror` library to describe every failure a run can hit, each with
//! enough context (usually the offending file) to be reported directly to the
//! operator.
//!
//! ## Taxonomy
//!
//! - **Load errors** (`MissingHeader`, `FieldCount`, `Load`, `Csv`): a race-day
//!   or loaner source could not be read. The run stops before any resolution.
//! - **Pool exhaustion** (`LoanerPoolExhausted`): the second pass needed a
//!   loaner bib and none were left. The run stops immediately.
//! - **Write errors** (`Write`): an output destination could not be written.
//!   Days already written are left in place.
//! - **Configuration errors** (`Config`, `Yaml`): the run was not given enough
//!   to start.
//!
//! Nothing in the library retries. Every variant is terminal for the run.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for bib-assigner operations
#[derive(Error, Debug)]
pub enum Error {
    /// A race-day source ended before its two leading header lines.
    #[error("Race file {} is missing header lines (found {found} of 2)", path.display())]
    MissingHeader { path: PathBuf, found: usize },

    /// A data line does not carry exactly one value per record field.
    #[error(
        "Race file {} line {line}: expected {expected} fields, found {found}",
        path.display()
    )]
    FieldCount {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A source file could not be opened or parsed.
    #[error("Failed to load {}: {message}", path.display())]
    Load { path: PathBuf, message: String },

    /// A loaner bib was requested after every loaner had been issued.
    #[error("Ran out of loaner bibs after issuing {issued}")]
    LoanerPoolExhausted { issued: usize },

    /// An output destination could not be written.
    #[error("Failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },

    /// The run configuration is incomplete or inconsistent.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Config {
        message: String,
        /// Optional hint for how to fix the configuration
        hint: Option<String>,
    },

    /// A CSV error, wrapped from `csv::Error`.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Attach a file to a CSV failure so the operator knows which source broke.
    pub(crate) fn load(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Error::Load {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
