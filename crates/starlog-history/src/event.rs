use starlog_core::models::{DiscoveryProgress, OrganicScanRecord, SignalRecord, SurfaceSignalReport};
use starlog_signals::SignalBatch;

/// Every journal event the history understands.
///
/// Closed on purpose: adding a variant forces every `match` to handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum JournalEvent {
    /// One signal occurrence.
    SignalDiscovered(SignalRecord),
    /// Several signals reported together under one timestamp.
    SignalsDiscovered(SignalBatch),
    SurfaceSignals(SurfaceSignalReport),
    OrganicScan(OrganicScanRecord),
    DiscoveryScan(DiscoveryProgress),
    AllBodiesFound { system_address: u64, count: u32 },
}

impl JournalEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            JournalEvent::SignalDiscovered(_) => "signal_discovered",
            JournalEvent::SignalsDiscovered(_) => "signals_discovered",
            JournalEvent::SurfaceSignals(_) => "surface_signals",
            JournalEvent::OrganicScan(_) => "organic_scan",
            JournalEvent::DiscoveryScan(_) => "discovery_scan",
            JournalEvent::AllBodiesFound { .. } => "all_bodies_found",
        }
    }
}
