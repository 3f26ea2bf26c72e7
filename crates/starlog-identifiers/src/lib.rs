//! # starlog-identifiers
//!
//! Best-effort translation table from raw machine identifiers
//! (`$SAA_SignalType_Biological;`, `$USS_Type_Salvage;`) to display text.
//! Observers poll [`IdentifierCache::generation`] to notice changes without
//! diffing the map.

pub mod cache;

pub use cache::{normalize_key, IdentifierCache};
