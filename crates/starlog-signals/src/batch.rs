//! A non-empty group of signal records reported under one occurrence.

use chrono::{DateTime, Utc};
use starlog_core::errors::{StarlogResult, ValidationError};
use starlog_core::models::{Category, SignalRecord};
use starlog_core::traits::{ContributesIdentifiers, IdentifierSink};

use crate::counts::CategoryCounts;

/// One or more signal records seen together, in arrival order.
///
/// Never empty: every constructor requires at least one record.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalBatch {
    records: Vec<SignalRecord>,
}

impl SignalBatch {
    /// Build a batch, rejecting an empty record list.
    pub fn new(records: Vec<SignalRecord>) -> Result<Self, ValidationError> {
        if records.is_empty() {
            return Err(ValidationError::EmptySignalBatch);
        }
        Ok(Self { records })
    }

    /// A batch holding one occurrence.
    pub fn single(record: SignalRecord) -> Self {
        Self {
            records: vec![record],
        }
    }

    /// Fold a later occurrence into this batch, after the existing records.
    pub fn absorb(&mut self, record: SignalRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[SignalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Time of the first occurrence in the batch.
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.records[0].recorded_at()
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts::from_records(&self.records)
    }

    pub fn count_of(&self, category: Category) -> usize {
        self.records
            .iter()
            .filter(|r| r.category() == category)
            .count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SignalRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a SignalBatch {
    type Item = &'a SignalRecord;
    type IntoIter = std::slice::Iter<'a, SignalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Only a raw, single-occurrence batch may contribute identifiers.
impl ContributesIdentifiers for SignalBatch {
    fn contribute_identifiers(&self, sink: &mut dyn IdentifierSink) -> StarlogResult<()> {
        if self.records.len() != 1 {
            return Err(ValidationError::MergedBatchContribution {
                records: self.records.len(),
            }
            .into());
        }
        for record in &self.records {
            record.contribute_identifiers(sink)?;
        }
        Ok(())
    }
}
