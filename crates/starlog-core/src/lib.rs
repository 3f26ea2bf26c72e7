//! # starlog-core
//!
//! Foundation crate for the Starlog journal aggregation system.
//! Defines the typed records, collaborator traits, errors, config, and constants
//! shared by the signal, organic, identifier, and history crates.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::StarlogConfig;
pub use errors::{StarlogError, StarlogResult, ValidationError};
pub use models::{
    Category, DiscoveryProgress, Genus, OrganicKey, OrganicObservation, OrganicScanRecord,
    ScanType, SignalObservation, SignalRecord, SurfaceSignal, SurfaceSignalClass,
    SurfaceSignalReport, SurfaceSource,
};
pub use traits::{Classifier, ContributesIdentifiers, IdentifierSink, SpeciesValuation};
