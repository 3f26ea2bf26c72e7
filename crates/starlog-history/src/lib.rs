//! # starlog-history
//!
//! The accumulation owner. [`History::apply`] routes each typed journal event
//! to its aggregate: identifiers are contributed from the raw occurrence first,
//! then signals, organic scans, surface reports, and discovery progress are
//! merged per system. [`History::snapshot`] hands out owned views.

pub mod event;
pub mod history;
pub mod observability;
pub mod snapshot;
pub mod summary;

pub use event::JournalEvent;
pub use history::History;
pub use snapshot::SystemSnapshot;
pub use summary::{PlainSummary, SummaryFormatter};
