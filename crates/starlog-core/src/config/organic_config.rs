use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::defaults;

/// Organic scan configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganicConfig {
    /// Scans at or after this instant use the current species value table.
    pub valuation_cutover: DateTime<Utc>,
}

impl Default for OrganicConfig {
    fn default() -> Self {
        Self {
            valuation_cutover: defaults::default_valuation_cutover(),
        }
    }
}
