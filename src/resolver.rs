//! # Bib Resolution
//!
//! This module assigns every competitor in a race series a bib that is unique
//! across all days of the run, keeping each competitor's home bib wherever one
//! exists.
//!
//! ## Passes
//!
//! 1.  **Home bibs**: every non-empty home bib on every day is claimed first,
//!     so nothing decided later can collide with a home bib that appears
//!     further down the series.
//!
//! 2.  **Everyone else**: each record without a home bib, in day order then
//!     record order, takes the first of:
//!     - the bib already assigned to the same competitor on an earlier record,
//!     - the away bib, if nobody has claimed it,
//!     - the next loaner bib nobody has claimed.
//!
//! Every bib chosen in the second pass (other than a reused assignment) is
//! claimed in the [`BibRegistry`] and remembered in the [`OverrideCache`]
//! under the competitor's identity key. Loaner bibs that are already claimed
//! are skipped, so a loaner never duplicates a home bib, an away bib in use or
//! an earlier loaner.
//!
//! Two different competitors carrying the same home bib both keep it; the
//! first pass never reassigns. The clash is logged as a warning.
//!
//! Running out of loaner bibs aborts the run with
//! [`Error::LoanerPoolExhausted`](crate::error::Error::LoanerPoolExhausted).
//! Days are mutated in place, so callers must not persist any day from a
//! failed resolution.

use std::collections::HashMap;
use std::fmt;

use log::{info, warn};

use crate::cache::OverrideCache;
use crate::entry::{Decision, HomeOrg, RaceEntry};
use crate::error::Result;
use crate::loaner::LoanerPool;
use crate::race_day::RaceDay;
use crate::registry::{BibRegistry, Holder};

/// Per-decision counts for a completed resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionSummary {
    counts: HashMap<Decision, usize>,
}

impl ResolutionSummary {
    fn record(&mut self, decision: Decision) {
        *self.counts.entry(decision).or_default() += 1;
    }

    /// Number of records that ended with `decision`.
    pub fn count(&self, decision: Decision) -> usize {
        self.counts.get(&decision).copied().unwrap_or(0)
    }

    /// Number of records resolved.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of loaner bibs issued.
    pub fn loaners_issued(&self) -> usize {
        self.count(Decision::Loaner) + self.count(Decision::LoanerConflict)
    }
}

impl fmt::Display for ResolutionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Decision::ALL
            .iter()
            .map(|d| format!("{}: {}", d.label(), self.count(*d)))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Runs the two resolution passes over a race series.
///
/// The resolver exclusively owns the registry, loaner pool and override cache
/// for the length of a run.
#[derive(Debug)]
pub struct BibResolver {
    home: HomeOrg,
    registry: BibRegistry,
    pool: LoanerPool,
    cache: OverrideCache,
}

impl BibResolver {
    pub fn new(home: HomeOrg, pool: LoanerPool) -> Self {
        Self {
            home,
            registry: BibRegistry::new(),
            pool,
            cache: OverrideCache::new(),
        }
    }

    pub fn home_org(&self) -> HomeOrg {
        self.home
    }

    pub fn registry(&self) -> &BibRegistry {
        &self.registry
    }

    pub fn pool(&self) -> &LoanerPool {
        &self.pool
    }

    pub fn cache(&self) -> &OverrideCache {
        &self.cache
    }

    /// Consume the resolver, returning its final state.
    pub fn into_parts(self) -> (BibRegistry, LoanerPool, OverrideCache) {
        (self.registry, self.pool, self.cache)
    }

    /// Run both passes over `days`, in the order given.
    pub fn resolve(&mut self, days: &mut [RaceDay]) -> Result<ResolutionSummary> {
        let mut summary = self.claim_home_bibs(days);
        let remaining = self.resolve_remaining(days)?;
        for (decision, count) in remaining.counts {
            *summary.counts.entry(decision).or_default() += count;
        }
        Ok(summary)
    }

    /// First pass: claim every home bib in the series.
    pub fn claim_home_bibs(&mut self, days: &mut [RaceDay]) -> ResolutionSummary {
        let mut summary = ResolutionSummary::default();

        for day in days.iter_mut() {
            info!("Home bib processing {}", day.name());

            for entry in day.entries.iter_mut() {
                let bib = entry.home_bib(self.home).to_string();
                if bib.is_empty() {
                    continue;
                }

                let key = entry.identity_key();
                let name = entry.display_name();
                let holder = Holder::new(key.as_str(), name.as_str());
                if let Some(first) = self.registry.claim(&bib, holder) {
                    if first.identity_key != key {
                        warn!(
                            "\t{}: home bib {} is also the home bib of {}",
                            name, bib, first.name
                        );
                    }
                }
                entry.set_decision(Decision::Home);
                summary.record(Decision::Home);
                info!("\t{}: home bib allocated {}", name, bib);
            }
        }

        summary
    }

    /// Second pass: settle every record that has no home bib.
    ///
    /// Must run after [`claim_home_bibs`](Self::claim_home_bibs) has seen the
    /// whole series.
    pub fn resolve_remaining(&mut self, days: &mut [RaceDay]) -> Result<ResolutionSummary> {
        let mut summary = ResolutionSummary::default();

        for day in days.iter_mut() {
            info!("Second pass processing {}", day.name());

            for entry in day.entries.iter_mut() {
                if !entry.home_bib(self.home).is_empty() {
                    continue;
                }
                let decision = self.resolve_entry(entry)?;
                summary.record(decision);
            }
        }

        Ok(summary)
    }

    fn resolve_entry(&mut self, entry: &mut RaceEntry) -> Result<Decision> {
        let key = entry.identity_key();
        let name = entry.display_name();
        if key.is_empty() {
            warn!(
                "\t{}: record has no identity fields; it shares an assignment with every other blank record",
                name
            );
        }

        if let Some(existing) = self.cache.get(&key) {
            info!("\t{}: using existing assignment {}", name, existing);
            entry.set_bib(self.home, existing);
            entry.set_decision(Decision::ExistingAssignment);
            return Ok(Decision::ExistingAssignment);
        }

        let away = entry.away_bib(self.home).to_string();
        let (bib, decision) = if away.is_empty() {
            let loaner = self.pool.next_bib(&self.registry)?;
            info!("\t{}: no bib, using loaner {}", name, loaner);
            (loaner, Decision::Loaner)
        } else if self.registry.is_claimed(&away) {
            let loaner = self.pool.next_bib(&self.registry)?;
            info!(
                "\t{}: away bib {} is taken, using loaner {}",
                name, away, loaner
            );
            (loaner, Decision::LoanerConflict)
        } else {
            info!("\t{}: using away bib {}", name, away);
            (away, Decision::Away)
        };

        entry.set_bib(self.home, &bib);
        self.registry.claim(&bib, Holder::new(key.as_str(), name));
        self.cache.insert(&key, &bib);
        entry.set_decision(decision);
        Ok(decision)
    }
}

/// Resolve `days` against a fresh registry and cache.
pub fn resolve_days(
    home: HomeOrg,
    pool: LoanerPool,
    days: &mut [RaceDay],
) -> Result<ResolutionSummary> {
    BibResolver::new(home, pool).resolve(days)
}
