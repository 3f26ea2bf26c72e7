//! One exobiology scan action against one organism variant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::UNKNOWN_ORGANIC;
use crate::traits::SpeciesValuation;

/// Stage of a Log → Sample → Sample → Analyse sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScanType {
    Log,
    Sample,
    Analyse,
}

impl ScanType {
    /// 1-based ordinal of the stage.
    pub fn ordinal(self) -> u8 {
        match self {
            ScanType::Log => 1,
            ScanType::Sample => 2,
            ScanType::Analyse => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScanType::Log => "Log",
            ScanType::Sample => "Sample",
            ScanType::Analyse => "Analyse",
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping key of an organism: genus, species, variant (empty when absent).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrganicKey {
    pub genus: String,
    pub species: String,
    pub variant: String,
}

impl fmt::Display for OrganicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.genus, self.species, self.variant)
    }
}

/// Pre-parsed fields of an organic scan event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganicObservation {
    #[serde(default)]
    pub system_address: u64,
    #[serde(default)]
    pub body: i32,
    #[serde(default)]
    pub genus: String,
    #[serde(default)]
    pub genus_localised: Option<String>,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub species_localised: Option<String>,
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub variant_localised: Option<String>,
    pub scan_type: ScanType,
}

impl OrganicObservation {
    pub fn new(
        genus: impl Into<String>,
        species: impl Into<String>,
        scan_type: ScanType,
    ) -> Self {
        Self {
            system_address: 0,
            body: 0,
            genus: genus.into(),
            genus_localised: None,
            species: species.into(),
            species_localised: None,
            variant: None,
            variant_localised: None,
            scan_type,
        }
    }
}

/// An immutable organic scan record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganicScanRecord {
    system_address: u64,
    body_id: i32,
    genus: String,
    genus_localised: String,
    species: String,
    species_localised: String,
    variant: Option<String>,
    variant_localised: Option<String>,
    scan_type: ScanType,
    timestamp: DateTime<Utc>,
    estimated_value: Option<i64>,
    potential_estimated_value: Option<i64>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl OrganicScanRecord {
    /// Build a record, filling empty names with [`UNKNOWN_ORGANIC`] and
    /// pricing the species through `valuation`.
    pub fn from_observation(
        obs: OrganicObservation,
        timestamp: DateTime<Utc>,
        valuation: &dyn SpeciesValuation,
    ) -> Self {
        let species = non_empty(Some(obs.species)).unwrap_or_else(|| UNKNOWN_ORGANIC.to_string());
        let species_localised = non_empty(obs.species_localised).unwrap_or_else(|| species.clone());
        let genus = non_empty(Some(obs.genus)).unwrap_or_else(|| UNKNOWN_ORGANIC.to_string());
        let genus_localised = non_empty(obs.genus_localised).unwrap_or_else(|| genus.clone());

        let value = valuation.value_of(&species, timestamp);
        let (estimated_value, potential_estimated_value) = match obs.scan_type {
            ScanType::Analyse => (value, None),
            ScanType::Log | ScanType::Sample => (None, value),
        };

        Self {
            system_address: obs.system_address,
            body_id: obs.body,
            genus,
            genus_localised,
            species,
            species_localised,
            variant: non_empty(obs.variant),
            variant_localised: non_empty(obs.variant_localised),
            scan_type: obs.scan_type,
            timestamp,
            estimated_value,
            potential_estimated_value,
        }
    }

    pub fn key(&self) -> OrganicKey {
        OrganicKey {
            genus: self.genus.clone(),
            species: self.species.clone(),
            variant: self.variant.clone().unwrap_or_default(),
        }
    }

    pub fn system_address(&self) -> u64 {
        self.system_address
    }

    pub fn body_id(&self) -> i32 {
        self.body_id
    }

    pub fn genus(&self) -> &str {
        &self.genus
    }

    pub fn genus_localised(&self) -> &str {
        &self.genus_localised
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn species_localised(&self) -> &str {
        &self.species_localised
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    pub fn variant_localised(&self) -> Option<&str> {
        self.variant_localised.as_deref()
    }

    pub fn scan_type(&self) -> ScanType {
        self.scan_type
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Realisable value; only set on Analyse.
    pub fn estimated_value(&self) -> Option<i64> {
        self.estimated_value
    }

    /// Value once analysed; only set before Analyse.
    pub fn potential_estimated_value(&self) -> Option<i64> {
        self.potential_estimated_value
    }

    /// Species text without the leading genus ("Bacterium Aurasus" → "Aurasus").
    pub fn species_localised_short(&self) -> &str {
        self.species_localised
            .strip_prefix(self.genus_localised.as_str())
            .and_then(|rest| rest.strip_prefix(' '))
            .unwrap_or(&self.species_localised)
    }

    /// Variant text without the leading species and dash; empty when there is no variant.
    ///
    /// The space after the dash is trimmed too ("Bacterium Aurasus - Teal" → "Teal").
    /// Text without the species prefix is returned untouched.
    pub fn variant_localised_short(&self) -> &str {
        let Some(variant) = self.variant_localised.as_deref().or(self.variant.as_deref()) else {
            return "";
        };
        variant
            .strip_prefix(self.species_localised.as_str())
            .and_then(|rest| rest.strip_prefix(" -"))
            .map(str::trim_start)
            .unwrap_or(variant)
    }
}
