use chrono::{DateTime, Utc};

/// Estimated credit value of a fully analysed species.
pub trait SpeciesValuation: Send + Sync {
    /// `None` when the species is not in the table.
    fn value_of(&self, species: &str, scanned_at: DateTime<Utc>) -> Option<i64>;
}

/// A valuation that knows nothing.
impl SpeciesValuation for () {
    fn value_of(&self, _species: &str, _scanned_at: DateTime<Utc>) -> Option<i64> {
        None
    }
}
