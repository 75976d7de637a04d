//! The pool of spare bibs handed out when a competitor has no usable bib.

use log::warn;

use crate::error::{Error, Result};
use crate::registry::BibRegistry;

/// An ordered, finite sequence of loaner bibs with a cursor that only moves
/// forward. A bib is issued at most once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanerPool {
    bibs: Vec<String>,
    cursor: usize,
    issued: Vec<String>,
}

impl LoanerPool {
    /// Create a pool that issues `bibs` in the given order.
    pub fn new(bibs: Vec<String>) -> Self {
        Self {
            bibs,
            cursor: 0,
            issued: Vec::new(),
        }
    }

    /// Issue the next loaner bib that `registry` has not claimed.
    ///
    /// Claimed bibs (a home bib, an away bib in use, or a repeated loaner row)
    /// are passed over with a warning and never come back. Running past the
    /// end of the pool is fatal for the run: the caller must stop rather than
    /// leave a competitor without a bib.
    pub fn next_bib(&mut self, registry: &BibRegistry) -> Result<String> {
        while let Some(bib) = self.bibs.get(self.cursor) {
            self.cursor += 1;
            if let Some(holder) = registry.holder(bib) {
                warn!(
                    "Skipping loaner bib {} which is already held by {}",
                    bib, holder.name
                );
                continue;
            }
            self.issued.push(bib.clone());
            return Ok(bib.clone());
        }

        Err(Error::LoanerPoolExhausted {
            issued: self.issued.len(),
        })
    }

    /// Number of bibs issued so far.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    /// Number of bibs the cursor has not reached yet.
    pub fn remaining(&self) -> usize {
        self.bibs.len() - self.cursor
    }

    pub fn len(&self) -> usize {
        self.bibs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bibs.is_empty()
    }

    /// The bibs issued so far, in issue order.
    pub fn issued_bibs(&self) -> &[String] {
        &self.issued
    }
}
