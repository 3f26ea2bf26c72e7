//! One occurrence of a discovered system signal.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::Category;
use crate::constants::{CARRIER_EXPIRY_SECS, FACTION_NONE};
use crate::errors::{StarlogResult, ValidationError};
use crate::traits::{Classifier, ContributesIdentifiers, IdentifierSink};

/// Pre-parsed fields of a signal event, exactly as reported.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalObservation {
    pub signal_name: String,
    pub signal_name_localised: Option<String>,
    pub signal_type: Option<String>,
    pub spawning_state: Option<String>,
    pub spawning_state_localised: Option<String>,
    pub spawning_faction: Option<String>,
    pub spawning_faction_localised: Option<String>,
    pub uss_type: Option<String>,
    pub uss_type_localised: Option<String>,
    pub threat_level: Option<i32>,
    pub time_remaining: Option<f64>,
    pub system_address: Option<u64>,
    pub is_station: Option<bool>,
}

impl SignalObservation {
    /// Observation carrying only a signal name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            signal_name: name.into(),
            ..Self::default()
        }
    }
}

/// A classified, immutable signal record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalRecord {
    name: String,
    localised_name: String,
    category: Category,
    signal_type: Option<String>,
    faction: Option<String>,
    faction_localised: Option<String>,
    state: Option<String>,
    state_localised: Option<String>,
    threat_level: Option<i32>,
    uss_type: Option<String>,
    uss_type_localised: Option<String>,
    is_station: Option<bool>,
    system_address: Option<u64>,
    recorded_at: DateTime<Utc>,
    time_remaining_secs: Option<f64>,
    expires_at: Option<DateTime<Utc>>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Localised text, or the raw value when no localisation was supplied.
fn localised_or(localised: Option<String>, raw: &Option<String>) -> Option<String> {
    present(localised).or_else(|| raw.clone())
}

impl SignalRecord {
    /// Classify and normalise an observation recorded at `recorded_at`.
    pub fn from_observation(
        obs: SignalObservation,
        recorded_at: DateTime<Utc>,
        classifier: &dyn Classifier,
    ) -> Result<Self, ValidationError> {
        if obs.signal_name.is_empty() {
            return Err(ValidationError::MissingField {
                record: "signal",
                field: "signal_name",
            });
        }

        let raw_localised = present(obs.signal_name_localised);
        let signal_type = present(obs.signal_type);
        let category = classifier.classify(
            &obs.signal_name,
            signal_type.as_deref(),
            obs.is_station == Some(true),
            raw_localised.as_deref(),
        );

        let state = present(obs.spawning_state);
        let state_localised = localised_or(obs.spawning_state_localised, &state);

        let mut faction = present(obs.spawning_faction);
        let mut faction_localised = localised_or(obs.spawning_faction_localised, &faction);
        if faction
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case(FACTION_NONE))
        {
            faction = None;
            faction_localised = None;
        }

        let uss_type = present(obs.uss_type);
        let uss_type_localised = localised_or(obs.uss_type_localised, &uss_type);

        let time_remaining_secs = if category == Category::Carrier {
            Some(CARRIER_EXPIRY_SECS)
        } else {
            obs.time_remaining
        };

        let expires_at = match time_remaining_secs {
            Some(secs) => {
                let non_finite = || ValidationError::NonFiniteTimeRemaining {
                    name: obs.signal_name.clone(),
                };
                if !secs.is_finite() {
                    return Err(non_finite());
                }
                let delta = Duration::microseconds((secs * 1_000_000.0).round() as i64);
                Some(recorded_at.checked_add_signed(delta).ok_or_else(non_finite)?)
            }
            None => None,
        };

        let localised_name = raw_localised.unwrap_or_else(|| obs.signal_name.clone());

        Ok(Self {
            name: obs.signal_name,
            localised_name,
            category,
            signal_type,
            faction,
            faction_localised,
            state,
            state_localised,
            threat_level: obs.threat_level,
            uss_type,
            uss_type_localised,
            is_station: obs.is_station,
            system_address: obs.system_address,
            recorded_at,
            time_remaining_secs,
            expires_at,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Localised name, or the raw name when none was reported.
    pub fn localised_name(&self) -> &str {
        &self.localised_name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn signal_type(&self) -> Option<&str> {
        self.signal_type.as_deref()
    }

    pub fn faction(&self) -> Option<&str> {
        self.faction.as_deref()
    }

    pub fn faction_localised(&self) -> Option<&str> {
        self.faction_localised.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn state_localised(&self) -> Option<&str> {
        self.state_localised.as_deref()
    }

    pub fn threat_level(&self) -> Option<i32> {
        self.threat_level
    }

    pub fn uss_type(&self) -> Option<&str> {
        self.uss_type.as_deref()
    }

    pub fn uss_type_localised(&self) -> Option<&str> {
        self.uss_type_localised.as_deref()
    }

    pub fn is_station(&self) -> Option<bool> {
        self.is_station
    }

    pub fn system_address(&self) -> Option<u64> {
        self.system_address
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Seconds until expiry as reported. Always [`CARRIER_EXPIRY_SECS`] for carriers.
    pub fn time_remaining_secs(&self) -> Option<f64> {
        self.time_remaining_secs
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Whether `other` describes the same signal.
    ///
    /// Carriers ignore expiry: their remaining-time counter resets and is not
    /// a distinguishing key. Note the asymmetry, only `self.category` is checked.
    pub fn is_same(&self, other: &SignalRecord) -> bool {
        self.name == other.name
            && self.faction == other.faction
            && self.state == other.state
            && self.uss_type == other.uss_type
            && self.threat_level == other.threat_level
            && (self.category == Category::Carrier || self.expires_at == other.expires_at)
    }

    /// Name worth showing; USS names are generic so they get none.
    pub fn display_name(&self) -> Option<&str> {
        match self.category {
            Category::Uss => None,
            _ => Some(&self.localised_name),
        }
    }

    /// Expiry worth showing; the forced carrier expiry is not shown.
    pub fn display_expiry(&self) -> Option<DateTime<Utc>> {
        match self.category {
            Category::Carrier => None,
            _ => self.expires_at,
        }
    }

    /// Carriers and megaships move between systems, so when they were seen matters.
    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        match self.category {
            Category::Carrier | Category::Megaship => Some(self.recorded_at),
            _ => None,
        }
    }
}

impl ContributesIdentifiers for SignalRecord {
    fn contribute_identifiers(&self, sink: &mut dyn IdentifierSink) -> StarlogResult<()> {
        if !self.name.is_empty() && !self.localised_name.is_empty() {
            sink.put(&self.name, &self.localised_name);
        }
        Ok(())
    }
}
