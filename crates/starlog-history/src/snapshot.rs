use std::collections::BTreeMap;

use starlog_core::models::{DiscoveryProgress, SignalRecord, SurfaceSignalReport};
use starlog_organics::OrganicProgress;
use starlog_signals::CategoryCounts;

/// Owned, point-in-time view of one system. Safe to hand to other threads.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSnapshot {
    pub system_address: u64,
    /// Deduplicated signals, most recently introduced first.
    pub signals: Vec<SignalRecord>,
    pub signal_counts: CategoryCounts,
    /// Organic progress by body id.
    pub organics: BTreeMap<i32, Vec<OrganicProgress>>,
    /// Latest surface report per body and source.
    pub surface: Vec<SurfaceSignalReport>,
    pub discovery: Option<DiscoveryProgress>,
    /// Identifier cache generation when the snapshot was taken.
    pub identifier_generation: u64,
}

impl SystemSnapshot {
    pub fn organic_progress(&self, body_id: i32) -> &[OrganicProgress] {
        self.organics
            .get(&body_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Sum of realisable values over every analysed organism.
    pub fn analysed_value(&self) -> i64 {
        self.organics
            .values()
            .flatten()
            .filter(|p| p.is_complete())
            .filter_map(|p| p.record.estimated_value())
            .sum()
    }
}
