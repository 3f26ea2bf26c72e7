use serde::{Deserialize, Serialize};

/// System scanner discovery progress for one system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryProgress {
    /// 0–100.
    pub progress_percent: f64,
    pub body_count: u32,
    pub non_body_count: u32,
    #[serde(default)]
    pub system_name: Option<String>,
    #[serde(default)]
    pub system_address: Option<u64>,
    /// Set once every body in the system has been found.
    #[serde(default)]
    pub all_bodies_found: Option<u32>,
}

impl DiscoveryProgress {
    /// Progress as reported on the wire, a 0–1 fraction.
    pub fn from_fraction(fraction: f64, body_count: u32, non_body_count: u32) -> Self {
        Self {
            progress_percent: fraction * 100.0,
            body_count,
            non_body_count,
            ..Self::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.all_bodies_found.is_some() || self.progress_percent >= 100.0
    }
}
