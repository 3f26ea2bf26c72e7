//! Newest-first duplicate elimination over a batch log.
//!
//! Both strategies visit batches from last to first and records within a batch
//! in order, keeping a candidate unless a kept record `is_same` as it. The
//! comparison is always `kept.is_same(candidate)`: carrier exemption is
//! decided by the kept record's category.

use std::collections::HashMap;

use starlog_core::config::DedupStrategy;
use starlog_core::models::SignalRecord;
use tracing::debug;

use crate::batch::SignalBatch;

/// Deduplicate with the chosen strategy. Output is identical for both.
pub fn deduplicate(batches: &[SignalBatch], strategy: DedupStrategy) -> Vec<SignalRecord> {
    match strategy {
        DedupStrategy::Linear => deduplicate_linear(batches),
        DedupStrategy::NameBucketed => deduplicate_name_bucketed(batches),
    }
}

fn newest_first(batches: &[SignalBatch]) -> impl Iterator<Item = &SignalRecord> {
    batches.iter().rev().flat_map(SignalBatch::iter)
}

/// O(n²): scan everything kept so far for every candidate.
pub fn deduplicate_linear(batches: &[SignalBatch]) -> Vec<SignalRecord> {
    let mut kept: Vec<SignalRecord> = Vec::new();
    for candidate in newest_first(batches) {
        if kept.iter().any(|k| k.is_same(candidate)) {
            debug!(name = candidate.name(), "dropping duplicate signal");
            continue;
        }
        kept.push(candidate.clone());
    }
    kept
}

/// Same result as [`deduplicate_linear`], scanning only records with the same name.
///
/// Exact because `is_same` requires equal names.
pub fn deduplicate_name_bucketed(batches: &[SignalBatch]) -> Vec<SignalRecord> {
    let mut kept: Vec<SignalRecord> = Vec::new();
    let mut by_name: HashMap<&str, Vec<usize>> = HashMap::new();
    for candidate in newest_first(batches) {
        let bucket = by_name.entry(candidate.name()).or_default();
        if bucket.iter().any(|&i| kept[i].is_same(candidate)) {
            debug!(name = candidate.name(), "dropping duplicate signal");
            continue;
        }
        bucket.push(kept.len());
        kept.push(candidate.clone());
    }
    kept
}
