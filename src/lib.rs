//! # Bib Assigner Library
//!
//! This library assigns a unique race bib to every competitor entry across a
//! multi-day ski race series. Each competitor keeps their home organization's
//! bib wherever they have one; otherwise they take their partner organization's
//! bib if it is free, or a loaner bib from a shared pool. A competitor seen on
//! several days ends up with the same bib on all of them.
//!
//! ## Quick Example
//!
//! ```
//! use bib_assigner::entry::{HomeOrg, RaceEntry};
//! use bib_assigner::loaner::LoanerPool;
//! use bib_assigner::race_day::RaceDay;
//! use bib_assigner::resolver::BibResolver;
//!
//! let mut day = RaceDay::new("saturday.csv");
//! day.entries.push(RaceEntry {
//!     mid_atlantic_bib: "12".to_string(),
//!     first_name: "Ann".to_string(),
//!     ..Default::default()
//! });
//! day.entries.push(RaceEntry {
//!     new_england_bib: "12".to_string(),
//!     first_name: "Bea".to_string(),
//!     ..Default::default()
//! });
//!
//! let pool = LoanerPool::new(vec!["901".to_string()]);
//! let mut resolver = BibResolver::new(HomeOrg::MidAtlantic, pool);
//! let mut days = vec![day];
//! resolver.resolve(&mut days).unwrap();
//!
//! assert_eq!(days[0].entries[0].mid_atlantic_bib, "12");
//! assert_eq!(days[0].entries[1].mid_atlantic_bib, "901");
//! assert_eq!(days[0].entries[1].decision, "Loaner - Conflict");
//! ```
//!
//! ## Core Concepts
//!
//! - **Records (`entry`, `race_day`)**: one competitor line, and the lines of
//!   one race-day file together with its header lines.
//! - **Resolution state (`registry`, `loaner`, `cache`)**: the bibs claimed so
//!   far, the loaner pool and its cursor, and the bib already decided for each
//!   returning competitor.
//! - **Resolver (`resolver`)**: the two-pass assignment over the whole series.
//! - **I/O (`loader`, `writer`)**: CSV in, CSV out.
//! - **Runs (`config`, `run`)**: run settings and the load, resolve, write
//!   sequence.

pub mod cache;
pub mod config;
pub mod entry;
pub mod error;
pub mod loader;
pub mod loaner;
pub mod logging;
pub mod race_day;
pub mod registry;
pub mod resolver;
pub mod run;
pub mod writer;

#[cfg(test)]
mod resolver_proptest;
