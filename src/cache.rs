//! Cross-day bib assignments, keyed by competitor identity

use std::collections::HashMap;

/// Bibs already decided for competitors without a home bib.
///
/// Once a competitor's identity key is present, every later lookup returns the
/// same bib. Entries are never replaced.
#[derive(Debug, Clone, Default)]
pub struct OverrideCache {
    assignments: HashMap<String, String>,
}

impl OverrideCache {
    /// Create a new empty override cache
    pub fn new() -> Self {
        Self::default()
    }

    /// The bib previously assigned to `identity_key`, if any
    pub fn get(&self, identity_key: &str) -> Option<&str> {
        self.assignments.get(identity_key).map(String::as_str)
    }

    /// Record `bib` for `identity_key` unless the key already has a bib.
    pub fn insert(&mut self, identity_key: &str, bib: &str) {
        self.assignments
            .entry(identity_key.to_string())
            .or_insert_with(|| bib.to_string());
    }

    /// Get the number of cached assignments
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
