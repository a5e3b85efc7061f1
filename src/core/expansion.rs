//! Per-record expand/collapse state.

use std::collections::HashMap;

use crate::core::experience::ExperienceId;

/// Maps record ids to their expanded flag.
///
/// Absent ids are collapsed. Entries are only ever flipped, never removed,
/// so a record keeps its state across filter changes.
#[derive(Debug, Clone, Default)]
pub struct ExpansionMap {
    entries: HashMap<ExperienceId, bool>,
}

impl ExpansionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &ExperienceId) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Flips one record's flag and returns the new value.
    pub fn toggle(&mut self, id: &ExperienceId) -> bool {
        let entry = self.entries.entry(id.clone()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Number of records currently expanded.
    pub fn expanded_count(&self) -> usize {
        self.entries.values().filter(|expanded| **expanded).count()
    }
}
