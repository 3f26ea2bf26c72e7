use serde::Serialize;
use starlog_core::models::{OrganicKey, OrganicScanRecord, ScanType};
use std::fmt;

/// Progress label of an organism: "1", "2", "2+" or "3".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StageLabel {
    #[serde(rename = "1")]
    Logged,
    #[serde(rename = "2")]
    Sampled,
    /// Sampled again without switching organism in between.
    #[serde(rename = "2+")]
    Resampled,
    #[serde(rename = "3")]
    Analysed,
}

impl StageLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StageLabel::Logged => "1",
            StageLabel::Sampled => "2",
            StageLabel::Resampled => "2+",
            StageLabel::Analysed => "3",
        }
    }
}

impl From<ScanType> for StageLabel {
    fn from(scan_type: ScanType) -> Self {
        match scan_type {
            ScanType::Log => StageLabel::Logged,
            ScanType::Sample => StageLabel::Sampled,
            ScanType::Analyse => StageLabel::Analysed,
        }
    }
}

impl fmt::Display for StageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Latest known state of one organism.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganicProgress {
    pub label: StageLabel,
    /// The most recent scan of this organism.
    pub record: OrganicScanRecord,
}

impl OrganicProgress {
    pub fn key(&self) -> OrganicKey {
        self.record.key()
    }

    pub fn is_complete(&self) -> bool {
        self.label == StageLabel::Analysed
    }
}
