mod config_error;
mod validation_error;

pub use config_error::ConfigError;
pub use validation_error::ValidationError;

/// Top-level error for every fallible Starlog operation.
///
/// Nothing here is fatal to the host: each variant is a local rejection
/// returned to the caller.
#[derive(Debug, thiserror::Error)]
pub enum StarlogError {
    #[error("validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Convenience alias used across the workspace.
pub type StarlogResult<T> = Result<T, StarlogError>;
