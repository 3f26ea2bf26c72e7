//! Test fixture loader for Starlog golden replay scenarios.
//!
//! Fixtures store journal observations as JSON. [`ReplayFixture::records`]
//! turns them into classified, priced records in file order.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use starlog_core::config::StarlogConfig;
use starlog_core::errors::{StarlogResult, ValidationError};
use starlog_core::models::{
    DiscoveryProgress, OrganicObservation, OrganicScanRecord, SignalObservation, SignalRecord,
    SurfaceSignalReport,
};
use starlog_organics::SpeciesValueTable;
use starlog_signals::SignalTypeClassifier;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension()
                .is_some_and(|ext| ext == "json")
                .then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Load a replay fixture by path relative to `test-fixtures/`.
pub fn load_replay(relative_path: &str) -> ReplayFixture {
    load_fixture(relative_path)
}

/// Load every replay fixture under `golden/`, paired with its file name.
pub fn load_all_replays() -> Vec<(String, ReplayFixture)> {
    list_fixtures("golden")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            (name.clone(), load_replay(&format!("golden/{name}")))
        })
        .collect()
}

// ── Fixture schema ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesValue {
    pub species: String,
    pub before: i64,
    pub after: i64,
}

/// One journal line as stored in a fixture.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FixtureEvent {
    Signal {
        system_address: u64,
        at: DateTime<Utc>,
        observation: SignalObservation,
    },
    Signals {
        system_address: u64,
        at: DateTime<Utc>,
        observations: Vec<SignalObservation>,
    },
    Organic {
        at: DateTime<Utc>,
        observation: OrganicObservation,
    },
    Surface {
        report: SurfaceSignalReport,
    },
    Discovery {
        system_address: u64,
        progress: DiscoveryProgress,
    },
    AllBodiesFound {
        system_address: u64,
        count: u32,
    },
}

/// A fixture event after classification and pricing.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureRecord {
    Signal(SignalRecord),
    Signals(Vec<SignalRecord>),
    Organic(OrganicScanRecord),
    Surface(SurfaceSignalReport),
    Discovery(DiscoveryProgress),
    AllBodiesFound { count: u32 },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedSignal {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub time_remaining_secs: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedOrganic {
    pub label: String,
    pub species: String,
    #[serde(default)]
    pub estimated_value: Option<i64>,
    #[serde(default)]
    pub potential_estimated_value: Option<i64>,
}

/// Expected snapshot of one system after the replay.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedSystem {
    pub system_address: u64,
    #[serde(default)]
    pub signals: Vec<ExpectedSignal>,
    #[serde(default)]
    pub signal_batches: Option<usize>,
    #[serde(default)]
    pub organics: BTreeMap<i32, Vec<ExpectedOrganic>>,
    #[serde(default)]
    pub surface_reports: Option<usize>,
    #[serde(default)]
    pub all_bodies_found: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedIdentifier {
    pub raw: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Expected {
    #[serde(default)]
    pub systems: Vec<ExpectedSystem>,
    #[serde(default)]
    pub identifier_generation: Option<u64>,
    #[serde(default)]
    pub identifiers: Vec<ExpectedIdentifier>,
}

/// A replay scenario: configuration, species values, events, and expectations.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayFixture {
    pub description: String,
    /// TOML configuration; defaults when absent.
    #[serde(default)]
    pub config: Option<String>,
    #[serde(default)]
    pub species_values: Vec<SpeciesValue>,
    pub events: Vec<FixtureEvent>,
    #[serde(default)]
    pub expected: Expected,
}

impl ReplayFixture {
    pub fn config(&self) -> StarlogResult<StarlogConfig> {
        match &self.config {
            Some(text) => StarlogConfig::from_toml(text),
            None => Ok(StarlogConfig::default()),
        }
    }

    pub fn value_table(&self, config: &StarlogConfig) -> SpeciesValueTable {
        self.species_values
            .iter()
            .fold(SpeciesValueTable::from_config(&config.organics), |table, v| {
                table.with_species(&v.species, v.before, v.after)
            })
    }

    /// Classify and price every event, in file order, with the default classifier.
    pub fn records(&self) -> StarlogResult<Vec<(u64, FixtureRecord)>> {
        let config = self.config()?;
        let table = self.value_table(&config);
        let classifier = SignalTypeClassifier::new();

        let mut records = Vec::with_capacity(self.events.len());
        for event in &self.events {
            let record = match event.clone() {
                FixtureEvent::Signal {
                    system_address,
                    at,
                    observation,
                } => (
                    system_address,
                    FixtureRecord::Signal(SignalRecord::from_observation(
                        observation,
                        at,
                        &classifier,
                    )?),
                ),
                FixtureEvent::Signals {
                    system_address,
                    at,
                    observations,
                } => {
                    let signals = observations
                        .into_iter()
                        .map(|obs| SignalRecord::from_observation(obs, at, &classifier))
                        .collect::<Result<Vec<_>, ValidationError>>()?;
                    (system_address, FixtureRecord::Signals(signals))
                }
                FixtureEvent::Organic { at, observation } => (
                    observation.system_address,
                    FixtureRecord::Organic(OrganicScanRecord::from_observation(
                        observation,
                        at,
                        &table,
                    )),
                ),
                FixtureEvent::Surface { report } => {
                    (report.system_address, FixtureRecord::Surface(report))
                }
                FixtureEvent::Discovery {
                    system_address,
                    progress,
                } => (system_address, FixtureRecord::Discovery(progress)),
                FixtureEvent::AllBodiesFound {
                    system_address,
                    count,
                } => (system_address, FixtureRecord::AllBodiesFound { count }),
            };
            records.push(record);
        }
        Ok(records)
    }
}
