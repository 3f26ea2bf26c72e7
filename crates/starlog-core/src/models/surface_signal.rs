//! Per-body surface signal reports from probing or the system scanner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SURFACE_SIGNAL_MARKER;
use crate::errors::StarlogResult;
use crate::traits::{ContributesIdentifiers, IdentifierSink};

/// Which instrument produced the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceSource {
    /// Surface mapping with probes.
    Mapped,
    /// Body signals seen by the system scanner.
    Scanned,
}

/// Class of a surface signal, derived from its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceSignalClass {
    Geological,
    Biological,
    Thargoid,
    Guardian,
    Human,
    Other,
    /// No `$SAA_SignalType` marker; usually a material name.
    Uncategorised,
}

/// One kind of surface signal and how many were found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSignal {
    pub kind: String,
    #[serde(default)]
    pub kind_localised: String,
    pub count: u32,
}

impl SurfaceSignal {
    /// Localised kind falls back to the raw kind when empty.
    pub fn new(kind: impl Into<String>, kind_localised: Option<String>, count: u32) -> Self {
        let kind = kind.into();
        let kind_localised = kind_localised
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| kind.clone());
        Self {
            kind,
            kind_localised,
            count,
        }
    }

    pub fn class(&self) -> SurfaceSignalClass {
        let kind = self.kind.as_str();
        if kind.contains("$SAA_SignalType_Geological;") {
            SurfaceSignalClass::Geological
        } else if kind.contains("$SAA_SignalType_Biological;") {
            SurfaceSignalClass::Biological
        } else if kind.contains("$SAA_SignalType_Thargoid;")
            || kind.contains("$SAA_SignalType_PlanetAnomaly;")
        {
            SurfaceSignalClass::Thargoid
        } else if kind.contains("$SAA_SignalType_Guardian;") {
            SurfaceSignalClass::Guardian
        } else if kind.contains("$SAA_SignalType_Human;") {
            SurfaceSignalClass::Human
        } else if kind.contains(SURFACE_SIGNAL_MARKER) {
            SurfaceSignalClass::Other
        } else {
            SurfaceSignalClass::Uncategorised
        }
    }
}

/// A genus known to be present on a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genus {
    pub genus: String,
    #[serde(default)]
    pub genus_localised: String,
}

impl Genus {
    pub fn new(genus: impl Into<String>, genus_localised: Option<String>) -> Self {
        let genus = genus.into();
        let genus_localised = genus_localised
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| genus.clone());
        Self {
            genus,
            genus_localised,
        }
    }
}

/// Surface signals reported for one body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSignalReport {
    pub system_address: u64,
    pub body_name: String,
    pub body_id: Option<i32>,
    pub source: SurfaceSource,
    pub recorded_at: DateTime<Utc>,
    #[serde(default)]
    pub signals: Vec<SurfaceSignal>,
    #[serde(default)]
    pub genuses: Vec<Genus>,
}

impl SurfaceSignalReport {
    /// Sum of signal counts in `class`.
    pub fn count_of(&self, class: SurfaceSignalClass) -> u32 {
        self.signals
            .iter()
            .filter(|s| s.class() == class)
            .map(|s| s.count)
            .sum()
    }

    pub fn has(&self, class: SurfaceSignalClass) -> bool {
        self.signals.iter().any(|s| s.class() == class)
    }

    /// Count for an exact kind (case-insensitive), zero when absent.
    pub fn contains(&self, kind: &str) -> u32 {
        self.signals
            .iter()
            .find(|s| s.kind.eq_ignore_ascii_case(kind))
            .map_or(0, |s| s.count)
    }
}

impl ContributesIdentifiers for SurfaceSignalReport {
    fn contribute_identifiers(&self, sink: &mut dyn IdentifierSink) -> StarlogResult<()> {
        for signal in &self.signals {
            if !signal.kind.is_empty() && !signal.kind_localised.is_empty() {
                sink.put(&signal.kind, &signal.kind_localised);
            }
        }
        Ok(())
    }
}
