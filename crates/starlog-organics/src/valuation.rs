//! In-memory species value table split at a valuation cutover.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use starlog_core::config::OrganicConfig;
use starlog_core::traits::SpeciesValuation;

/// Species values before and after the cutover.
#[derive(Debug, Clone, Default)]
pub struct SpeciesValueTable {
    cutover: DateTime<Utc>,
    before: HashMap<String, i64>,
    after: HashMap<String, i64>,
}

impl SpeciesValueTable {
    pub fn new(cutover: DateTime<Utc>) -> Self {
        Self {
            cutover,
            ..Self::default()
        }
    }

    pub fn from_config(config: &OrganicConfig) -> Self {
        Self::new(config.valuation_cutover)
    }

    /// Set both values of a species.
    pub fn with_species(mut self, species: &str, before: i64, after: i64) -> Self {
        self.before.insert(species.to_string(), before);
        self.after.insert(species.to_string(), after);
        self
    }

    pub fn insert_before(&mut self, species: &str, value: i64) {
        self.before.insert(species.to_string(), value);
    }

    pub fn insert_after(&mut self, species: &str, value: i64) {
        self.after.insert(species.to_string(), value);
    }

    pub fn cutover(&self) -> DateTime<Utc> {
        self.cutover
    }
}

impl SpeciesValuation for SpeciesValueTable {
    fn value_of(&self, species: &str, scanned_at: DateTime<Utc>) -> Option<i64> {
        let table = if scanned_at < self.cutover {
            &self.before
        } else {
            &self.after
        };
        table.get(species).copied()
    }
}
