use crate::errors::StarlogResult;

/// Destination for raw identifier → display text pairs.
pub trait IdentifierSink {
    /// Record a translation. Returns `true` if the sink changed.
    fn put(&mut self, raw_id: &str, display_text: &str) -> bool;
}

/// Implemented by every event value carrying identifier-bearing fields.
///
/// Called once per raw occurrence, before that occurrence is merged into any
/// aggregate view.
pub trait ContributesIdentifiers {
    fn contribute_identifiers(&self, sink: &mut dyn IdentifierSink) -> StarlogResult<()>;
}
