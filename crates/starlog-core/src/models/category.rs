use serde::{Deserialize, Serialize};
use std::fmt;

use crate::traits::Classifier;

/// Closed taxonomy of system signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Station,
    Carrier,
    Megaship,
    Installation,
    ConflictZone,
    ResourceExtraction,
    NotableStellarPhenomena,
    #[serde(rename = "USS")]
    Uss,
    /// Catch-all for anything the classifier does not recognise.
    #[serde(other)]
    Other,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 9;

    /// Every category, in declaration order.
    pub const ALL: [Category; Self::COUNT] = [
        Category::Station,
        Category::Carrier,
        Category::Megaship,
        Category::Installation,
        Category::ConflictZone,
        Category::ResourceExtraction,
        Category::NotableStellarPhenomena,
        Category::Uss,
        Category::Other,
    ];

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Station => "Station",
            Category::Carrier => "Carrier",
            Category::Megaship => "Megaship",
            Category::Installation => "Installation",
            Category::ConflictZone => "ConflictZone",
            Category::ResourceExtraction => "ResourceExtraction",
            Category::NotableStellarPhenomena => "NotableStellarPhenomena",
            Category::Uss => "USS",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bare category classifies every signal as itself.
impl Classifier for Category {
    fn classify(
        &self,
        _name: &str,
        _signal_type: Option<&str>,
        _is_station: bool,
        _localised_name: Option<&str>,
    ) -> Category {
        *self
    }
}
