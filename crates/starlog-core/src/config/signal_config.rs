use serde::{Deserialize, Serialize};

use super::defaults;

/// How `SignalAggregator::materialize` finds duplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupStrategy {
    /// Linear scan of everything kept so far.
    #[default]
    Linear,
    /// Bucket kept records by name, then scan only the matching bucket.
    NameBucketed,
}

/// Signal aggregation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    pub dedup_strategy: DedupStrategy,
    /// Fold consecutive signal occurrences sharing a timestamp into one batch.
    ///
    /// Grouped occurrences keep arrival order inside the batch, so among
    /// duplicates at the same instant the first one reported is kept. With
    /// grouping off every occurrence is its own batch and the last one wins.
    pub group_same_timestamp: bool,
    /// Batch summaries list names only below this many signals.
    pub summary_max_signals: usize,
    /// Spawning state text is cut to this many characters in summaries.
    pub state_truncate_chars: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            dedup_strategy: DedupStrategy::default(),
            group_same_timestamp: defaults::DEFAULT_GROUP_SAME_TIMESTAMP,
            summary_max_signals: defaults::DEFAULT_SUMMARY_MAX_SIGNALS,
            state_truncate_chars: defaults::DEFAULT_STATE_TRUNCATE_CHARS,
        }
    }
}
