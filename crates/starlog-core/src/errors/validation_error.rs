/// Contract violations detected at the boundary, before a record reaches an aggregate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("signal batch must contain at least one record")]
    EmptySignalBatch,

    #[error("{record} is missing required field `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("signal {name} has a non-finite time remaining")]
    NonFiniteTimeRemaining { name: String },

    #[error("identifiers must be contributed from a single occurrence, batch holds {records} records")]
    MergedBatchContribution { records: usize },
}
