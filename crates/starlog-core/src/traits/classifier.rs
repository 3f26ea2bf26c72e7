use crate::models::Category;

/// Maps a raw signal to its category.
///
/// Must be a pure function of its inputs. Anything it does not recognise
/// belongs in [`Category::Other`].
pub trait Classifier: Send + Sync {
    /// `localised_name` is the raw localisation as reported, before any fallback.
    fn classify(
        &self,
        name: &str,
        signal_type: Option<&str>,
        is_station: bool,
        localised_name: Option<&str>,
    ) -> Category;
}
