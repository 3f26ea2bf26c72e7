//! Default values for every config field.

use chrono::{DateTime, Utc};

pub const DEFAULT_GROUP_SAME_TIMESTAMP: bool = true;
pub const DEFAULT_SUMMARY_MAX_SIGNALS: usize = 20;
pub const DEFAULT_STATE_TRUNCATE_CHARS: usize = 32;

/// Unix seconds of the exobiology valuation change (2022-11-29T00:00:00Z).
pub const DEFAULT_VALUATION_CUTOVER_SECS: i64 = 1_669_680_000;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

pub fn default_valuation_cutover() -> DateTime<Utc> {
    DateTime::from_timestamp(DEFAULT_VALUATION_CUTOVER_SECS, 0).unwrap_or_default()
}
