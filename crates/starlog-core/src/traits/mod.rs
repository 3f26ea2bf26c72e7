mod classifier;
mod identifiers;
mod valuation;

pub use classifier::Classifier;
pub use identifiers::{ContributesIdentifiers, IdentifierSink};
pub use valuation::SpeciesValuation;
