//! # starlog-signals
//!
//! Signal aggregation for one star system visit: occurrences are appended as
//! batches, and `materialize` walks them newest first, keeping the first record
//! of every group of duplicates.

pub mod aggregator;
pub mod batch;
pub mod classifier;
pub mod counts;
pub mod dedup;

pub use aggregator::SignalAggregator;
pub use batch::SignalBatch;
pub use classifier::SignalTypeClassifier;
pub use counts::CategoryCounts;
