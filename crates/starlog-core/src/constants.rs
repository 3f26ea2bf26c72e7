/// Starlog system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Remaining time forced onto every carrier signal (10 days).
///
/// Carriers report a self-resetting counter, so the reported value is discarded.
pub const CARRIER_EXPIRY_SECS: f64 = 10.0 * 60.0 * 60.0 * 24.0;

/// Genus/species placeholder for organic scans that arrive with empty names.
pub const UNKNOWN_ORGANIC: &str = "Unknown";

/// Faction marker meaning "no faction"; cleared on ingest.
pub const FACTION_NONE: &str = "$faction_none;";

/// Entity artifact found in localised text, replaced by a plain space.
pub const NBSP_ENTITY: &str = "&NBSP;";

/// Marker present in every categorised surface signal kind.
pub const SURFACE_SIGNAL_MARKER: &str = "$SAA_SignalType";
