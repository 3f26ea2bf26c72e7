//! Rule-based default classifier.
//!
//! The reported signal type wins when present. Older records carry no type, so
//! the name is matched against known scenario prefixes and the carrier
//! call-sign shape.

use std::sync::LazyLock;

use regex::Regex;
use starlog_core::models::Category;
use starlog_core::traits::Classifier;

/// Carrier names end in a `XXX-XXX` call sign.
static RE_CARRIER_CALLSIGN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)[A-Z0-9]{3}-[A-Z0-9]{3}$").ok());

const RESOURCE_EXTRACTION_NAMES: &[&str] = &[
    "$multiplayer_scenario14_title;",
    "$multiplayer_scenario77_title;",
    "$multiplayer_scenario78_title;",
    "$multiplayer_scenario79_title;",
];

fn looks_like_carrier(name: &str) -> bool {
    RE_CARRIER_CALLSIGN
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

fn by_signal_type(signal_type: &str) -> Option<Category> {
    let category = match signal_type {
        "FleetCarrier" | "SquadronCarrier" => Category::Carrier,
        "Megaship" | "StationMegaShip" => Category::Megaship,
        "Installation" => Category::Installation,
        "Combat" => Category::ConflictZone,
        "ResourceExtraction" => Category::ResourceExtraction,
        "Codex" => Category::NotableStellarPhenomena,
        "USS" => Category::Uss,
        "Outpost" | "SurfaceStation" => Category::Station,
        t if t.starts_with("Station") => Category::Station,
        _ => return None,
    };
    Some(category)
}

/// Classifies from the signal type, falling back to name patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalTypeClassifier;

impl SignalTypeClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Classifier for SignalTypeClassifier {
    fn classify(
        &self,
        name: &str,
        signal_type: Option<&str>,
        is_station: bool,
        localised_name: Option<&str>,
    ) -> Category {
        if let Some(category) = signal_type.and_then(by_signal_type) {
            return category;
        }

        let unlocalised = localised_name.map_or(true, str::is_empty);
        if is_station {
            return if unlocalised && looks_like_carrier(name) {
                Category::Carrier
            } else {
                Category::Station
            };
        }

        let lower = name.to_ascii_lowercase();
        if lower.starts_with("$uss") {
            Category::Uss
        } else if lower.starts_with("$warzone_") {
            Category::ConflictZone
        } else if RESOURCE_EXTRACTION_NAMES.contains(&lower.as_str()) {
            Category::ResourceExtraction
        } else if lower.starts_with("$fixed_event_life_") {
            Category::NotableStellarPhenomena
        } else if unlocalised && looks_like_carrier(name) {
            Category::Carrier
        } else {
            Category::Other
        }
    }
}
