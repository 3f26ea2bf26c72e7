//! # starlog-organics
//!
//! Collapses interleaved Log → Sample → Sample → Analyse scan actions into the
//! current progress per organism. A partial sequence is abandoned as soon as
//! another organism is scanned; an analysed one is kept.

pub mod progress;
pub mod reducer;
pub mod valuation;

pub use progress::{OrganicProgress, StageLabel};
pub use reducer::{reduce, OrganicScanReducer};
pub use valuation::SpeciesValueTable;
