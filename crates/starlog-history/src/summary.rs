//! Plain-text summaries of signals, organic progress, and surface reports.
//!
//! Localisation is pass-through: the localised text already on the records
//! is what gets printed.

use chrono::{DateTime, Utc};

use starlog_core::config::SignalConfig;
use starlog_core::models::{Category, SignalRecord, SurfaceSignalReport};
use starlog_organics::OrganicProgress;
use starlog_signals::SignalBatch;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Display hook over the accumulated views.
pub trait SummaryFormatter {
    fn signal(&self, record: &SignalRecord) -> String;
    fn signal_batch(&self, batch: &SignalBatch) -> String;
    fn organic(&self, progress: &OrganicProgress) -> String;
    fn surface(&self, report: &SurfaceSignalReport) -> String;
}

/// Comma separated plain text.
#[derive(Debug, Clone)]
pub struct PlainSummary {
    max_signals: usize,
    state_truncate_chars: usize,
    show_last_seen: bool,
}

impl Default for PlainSummary {
    fn default() -> Self {
        Self::new(&SignalConfig::default())
    }
}

impl PlainSummary {
    pub fn new(config: &SignalConfig) -> Self {
        Self {
            max_signals: config.summary_max_signals,
            state_truncate_chars: config.state_truncate_chars,
            show_last_seen: true,
        }
    }

    /// Leave `Last Seen` out of signal lines.
    pub fn without_last_seen(mut self) -> Self {
        self.show_last_seen = false;
        self
    }
}

impl SummaryFormatter for PlainSummary {
    fn signal(&self, record: &SignalRecord) -> String {
        let tag = match record.category() {
            Category::Station => Some("Station"),
            Category::Carrier => Some("Carrier"),
            Category::Megaship => Some("Megaship"),
            Category::Installation => Some("Installation"),
            _ => None,
        };

        let mut parts = Vec::new();
        match (tag, record.display_name()) {
            (Some(tag), Some(name)) => parts.push(format!("{tag}: {name}")),
            (Some(tag), None) => parts.push(tag.to_string()),
            (None, Some(name)) => parts.push(name.to_string()),
            (None, None) => {}
        }
        if let Some(uss) = record.uss_type_localised() {
            parts.push(uss.to_string());
        }
        if let Some(level) = record.threat_level() {
            parts.push(format!("Threat Level: {level}"));
        }
        if let Some(faction) = record.faction_localised() {
            parts.push(format!("Faction: {faction}"));
        }
        if let Some(state) = record.state_localised() {
            parts.push(format!(
                "State: {}",
                truncate(state, self.state_truncate_chars)
            ));
        }
        if let Some(expiry) = record.display_expiry() {
            parts.push(format!("Time: {}", format_time(expiry)));
        }
        if self.show_last_seen {
            if let Some(seen) = record.last_seen() {
                parts.push(format!("Last Seen: {}", format_time(seen)));
            }
        }
        parts.join(", ")
    }

    fn signal_batch(&self, batch: &SignalBatch) -> String {
        if let [only] = batch.records() {
            return self.signal(only);
        }

        let mut text = format!("Detected {} signals", batch.len());
        if batch.len() < self.max_signals {
            for record in batch {
                let name = match record.category() {
                    Category::Uss => record
                        .uss_type_localised()
                        .unwrap_or(record.localised_name()),
                    _ => record.localised_name(),
                };
                text.push_str(", ");
                text.push_str(name);
            }
        }
        text
    }

    fn organic(&self, progress: &OrganicProgress) -> String {
        let record = &progress.record;
        let mut text = format!(
            "{}/3 {}: {}",
            progress.label,
            record.scan_type().as_str(),
            record.genus_localised()
        );
        for part in [record.species_localised_short(), record.variant_localised_short()] {
            if !part.is_empty() {
                text.push(' ');
                text.push_str(part);
            }
        }
        if let Some(value) = record.estimated_value() {
            text.push_str(&format!(", Value: {} cr", group_thousands(value)));
        } else if let Some(value) = record.potential_estimated_value() {
            text.push_str(&format!(", Potential Value: {} cr", group_thousands(value)));
        }
        text
    }

    fn surface(&self, report: &SurfaceSignalReport) -> String {
        let signals = report
            .signals
            .iter()
            .map(|s| format!("{}: {}", s.kind_localised, s.count))
            .collect::<Vec<_>>()
            .join(", ");
        if report.genuses.is_empty() {
            return signals;
        }
        let genuses = report
            .genuses
            .iter()
            .map(|g| g.genus_localised.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{signals}; {genuses}")
    }
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// First `max` characters, with ".." appended when anything was cut.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}..", &text[..end]),
        None => text.to_string(),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
