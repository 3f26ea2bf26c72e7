pub mod defaults;
mod observability_config;
mod organic_config;
mod signal_config;

pub use observability_config::ObservabilityConfig;
pub use organic_config::OrganicConfig;
pub use signal_config::{DedupStrategy, SignalConfig};

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, StarlogResult};

/// Top-level Starlog configuration.
///
/// Every section is optional in TOML; missing sections and fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarlogConfig {
    pub signals: SignalConfig,
    pub organics: OrganicConfig,
    pub observability: ObservabilityConfig,
}

impl StarlogConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> StarlogResult<Self> {
        toml::from_str(text).map_err(|e| {
            ConfigError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Render the config back to TOML.
    pub fn to_toml(&self) -> StarlogResult<String> {
        toml::to_string(self).map_err(|e| {
            ConfigError::Serialize {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
