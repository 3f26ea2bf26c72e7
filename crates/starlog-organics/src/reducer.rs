//! Staged reduction of organic scan records.

use starlog_core::models::{OrganicKey, OrganicScanRecord, ScanType};
use tracing::debug;

use crate::progress::{OrganicProgress, StageLabel};

/// Reduce scans to the latest valid progress per organism.
///
/// Records are stably sorted by timestamp first. Switching to a different
/// organism purges every entry not yet at Analyse. Entries keep the position
/// they were first inserted at.
pub fn reduce(records: &[OrganicScanRecord]) -> Vec<OrganicProgress> {
    let mut ordered: Vec<&OrganicScanRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.timestamp());

    let mut stage: Vec<(OrganicKey, OrganicProgress)> = Vec::new();
    let mut current: Option<OrganicKey> = None;

    for record in ordered {
        let key = record.key();

        if current.as_ref().is_some_and(|c| *c != key) {
            let before = stage.len();
            stage.retain(|(_, p)| p.record.scan_type() == ScanType::Analyse);
            if stage.len() < before {
                debug!(
                    switched_to = %key,
                    purged = before - stage.len(),
                    "abandoned partial organic scans"
                );
            }
        }

        let existing = stage.iter().position(|(k, _)| *k == key);
        let label = match existing {
            Some(i)
                if stage[i].1.record.scan_type() == ScanType::Sample
                    && record.scan_type() == ScanType::Sample =>
            {
                StageLabel::Resampled
            }
            _ => StageLabel::from(record.scan_type()),
        };

        let progress = OrganicProgress {
            label,
            record: record.clone(),
        };
        match existing {
            Some(i) => stage[i].1 = progress,
            None => stage.push((key.clone(), progress)),
        }
        current = Some(key);
    }

    stage.into_iter().map(|(_, p)| p).collect()
}

/// Owns the scan log of one body and reduces it on demand.
#[derive(Debug, Clone, Default)]
pub struct OrganicScanReducer {
    records: Vec<OrganicScanRecord>,
}

impl OrganicScanReducer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: OrganicScanRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[OrganicScanRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current progress; recomputed from the full log on every call.
    pub fn progress(&self) -> Vec<OrganicProgress> {
        reduce(&self.records)
    }
}

impl Extend<OrganicScanRecord> for OrganicScanReducer {
    fn extend<I: IntoIterator<Item = OrganicScanRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}
