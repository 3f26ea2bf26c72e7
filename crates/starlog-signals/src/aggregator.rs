//! SignalAggregator: append-only batch log with on-demand deduplication.

use starlog_core::config::DedupStrategy;
use starlog_core::errors::ValidationError;
use starlog_core::models::SignalRecord;

use crate::batch::SignalBatch;
use crate::dedup;

/// Signal history for one system visit.
///
/// Mutation takes `&mut self`; there is no internal locking. Share across
/// threads only behind the caller's own synchronisation.
#[derive(Debug, Clone, Default)]
pub struct SignalAggregator {
    batches: Vec<SignalBatch>,
    strategy: DedupStrategy,
}

impl SignalAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: DedupStrategy) -> Self {
        Self {
            batches: Vec::new(),
            strategy,
        }
    }

    pub fn strategy(&self) -> DedupStrategy {
        self.strategy
    }

    /// Append a batch after everything seen so far.
    pub fn append(&mut self, batch: SignalBatch) {
        self.batches.push(batch);
    }

    /// Validate `records` as a batch and append it.
    pub fn append_records(&mut self, records: Vec<SignalRecord>) -> Result<(), ValidationError> {
        self.append(SignalBatch::new(records)?);
        Ok(())
    }

    /// Fold `record` into the most recent batch. Returns it back when the log is empty.
    pub fn extend_last(&mut self, record: SignalRecord) -> Result<(), SignalRecord> {
        match self.batches.last_mut() {
            Some(last) => {
                last.absorb(record);
                Ok(())
            }
            None => Err(record),
        }
    }

    /// The deduplicated view, most recently introduced signal first.
    ///
    /// Recomputed on every call; equal output for equal logs.
    pub fn materialize(&self) -> Vec<SignalRecord> {
        dedup::deduplicate(&self.batches, self.strategy)
    }

    pub fn batches(&self) -> &[SignalBatch] {
        &self.batches
    }

    pub fn last_batch(&self) -> Option<&SignalBatch> {
        self.batches.last()
    }

    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Total records across all batches, duplicates included.
    pub fn record_count(&self) -> usize {
        self.batches.iter().map(SignalBatch::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}
