//! Tracing setup: subscriber installation and span definitions.

use starlog_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "STARLOG_LOG";

/// Install a global fmt subscriber.
///
/// `STARLOG_LOG` wins over `config.log_level` when set and valid. Returns
/// `false` when a global subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json_logs {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

/// Create the span wrapping one `History::apply`.
#[macro_export]
macro_rules! apply_span {
    ($system_address:expr, $kind:expr) => {
        tracing::info_span!("starlog.apply", system_address = $system_address, kind = $kind)
    };
}
