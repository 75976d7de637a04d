//! The set of bibs already claimed in the current run.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// The competitor a bib was first claimed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holder {
    pub identity_key: String,
    pub name: String,
}

impl Holder {
    pub fn new(identity_key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identity_key: identity_key.into(),
            name: name.into(),
        }
    }
}

/// Bibs claimed so far. A claimed bib stays claimed, by its first holder,
/// until the run ends.
#[derive(Debug, Clone, Default)]
pub struct BibRegistry {
    claimed: HashMap<String, Holder>,
}

impl BibRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_claimed(&self, bib: &str) -> bool {
        self.claimed.contains_key(bib)
    }

    /// Who holds `bib`, if anyone.
    pub fn holder(&self, bib: &str) -> Option<&Holder> {
        self.claimed.get(bib)
    }

    /// Claim `bib` for `holder`.
    ///
    /// Returns `None` when the bib was free. When it was already claimed the
    /// first holder is kept and returned.
    pub fn claim(&mut self, bib: &str, holder: Holder) -> Option<&Holder> {
        match self.claimed.entry(bib.to_string()) {
            Entry::Occupied(existing) => Some(existing.into_mut()),
            Entry::Vacant(slot) => {
                slot.insert(holder);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}
