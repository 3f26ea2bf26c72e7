mod category;
mod discovery;
mod organic_scan;
mod signal_record;
mod surface_signal;

pub use category::Category;
pub use discovery::DiscoveryProgress;
pub use organic_scan::{OrganicKey, OrganicObservation, OrganicScanRecord, ScanType};
pub use signal_record::{SignalObservation, SignalRecord};
pub use surface_signal::{Genus, SurfaceSignal, SurfaceSignalClass, SurfaceSignalReport, SurfaceSource};
