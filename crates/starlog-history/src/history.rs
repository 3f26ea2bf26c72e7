//! History: routes journal events into per-system aggregates.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use starlog_core::config::StarlogConfig;
use starlog_core::errors::{StarlogResult, ValidationError};
use starlog_core::models::{DiscoveryProgress, SignalRecord, SurfaceSignalReport, SurfaceSource};
use starlog_core::traits::ContributesIdentifiers;
use starlog_identifiers::IdentifierCache;
use starlog_organics::OrganicScanReducer;
use starlog_signals::{CategoryCounts, SignalAggregator, SignalBatch};

use crate::event::JournalEvent;
use crate::snapshot::SystemSnapshot;

/// Everything accumulated for one system.
#[derive(Debug, Clone, Default)]
struct SystemScan {
    signals: SignalAggregator,
    organics: BTreeMap<i32, OrganicScanReducer>,
    surface: BTreeMap<(String, SurfaceSource), SurfaceSignalReport>,
    discovery: Option<DiscoveryProgress>,
}

/// Owner of all per-system aggregates and the shared identifier cache.
///
/// Single writer: every mutation takes `&mut self`. Hand
/// [`SystemSnapshot`]s to other threads instead of sharing the history.
#[derive(Debug, Clone, Default)]
pub struct History {
    config: StarlogConfig,
    systems: BTreeMap<u64, SystemScan>,
    identifiers: IdentifierCache,
    /// System and timestamp of the previous event, when it was a signal.
    last_signal: Option<(u64, DateTime<Utc>)>,
}

impl History {
    pub fn new(config: StarlogConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Apply `events` in order to a fresh history.
    pub fn replay(
        config: StarlogConfig,
        events: impl IntoIterator<Item = (u64, JournalEvent)>,
    ) -> StarlogResult<Self> {
        let mut history = Self::new(config);
        for (system_address, event) in events {
            history.apply(system_address, event)?;
        }
        Ok(history)
    }

    pub fn config(&self) -> &StarlogConfig {
        &self.config
    }

    /// Apply one event. Identifiers are contributed before any merging.
    ///
    /// A rejected event leaves the history unchanged.
    pub fn apply(&mut self, system_address: u64, event: JournalEvent) -> StarlogResult<()> {
        let span = crate::apply_span!(system_address, event.kind());
        let _guard = span.enter();

        let result = self.route(system_address, event);
        if let Err(err) = &result {
            warn!(system_address, error = %err, "journal event rejected");
        }
        result
    }

    fn route(&mut self, system_address: u64, event: JournalEvent) -> StarlogResult<()> {
        match event {
            JournalEvent::SignalDiscovered(record) => {
                record.contribute_identifiers(&mut self.identifiers)?;
                self.add_signal(system_address, record);
                return Ok(());
            }
            JournalEvent::SignalsDiscovered(batch) => {
                for record in &batch {
                    record.contribute_identifiers(&mut self.identifiers)?;
                }
                let recorded_at = batch.recorded_at();
                self.system_mut(system_address).signals.append(batch);
                self.last_signal = Some((system_address, recorded_at));
                return Ok(());
            }
            JournalEvent::SurfaceSignals(report) => {
                if report.body_name.is_empty() {
                    return Err(ValidationError::MissingField {
                        record: "surface signals",
                        field: "body_name",
                    }
                    .into());
                }
                report.contribute_identifiers(&mut self.identifiers)?;
                let key = (report.body_name.clone(), report.source);
                self.system_mut(system_address).surface.insert(key, report);
            }
            JournalEvent::OrganicScan(record) => {
                self.system_mut(system_address)
                    .organics
                    .entry(record.body_id())
                    .or_default()
                    .push(record);
            }
            JournalEvent::DiscoveryScan(mut progress) => {
                let scan = self.system_mut(system_address);
                if progress.all_bodies_found.is_none() {
                    progress.all_bodies_found =
                        scan.discovery.as_ref().and_then(|d| d.all_bodies_found);
                }
                scan.discovery = Some(progress);
            }
            JournalEvent::AllBodiesFound { count, .. } => {
                self.system_mut(system_address)
                    .discovery
                    .get_or_insert_with(DiscoveryProgress::default)
                    .all_bodies_found = Some(count);
            }
        }

        // Any other event ends a run of same-timestamp signals.
        self.last_signal = None;
        Ok(())
    }

    /// Grouped occurrences are absorbed after the batch's existing records, so
    /// a same-instant duplicate loses to the one reported before it.
    fn add_signal(&mut self, system_address: u64, record: SignalRecord) {
        let recorded_at = record.recorded_at();
        let group = self.config.signals.group_same_timestamp
            && self.last_signal == Some((system_address, recorded_at));
        let signals = &mut self.system_mut(system_address).signals;

        if group {
            if let Err(record) = signals.extend_last(record) {
                signals.append(SignalBatch::single(record));
            } else {
                debug!(system_address, %recorded_at, "grouped signal into previous batch");
            }
        } else {
            signals.append(SignalBatch::single(record));
        }
        self.last_signal = Some((system_address, recorded_at));
    }

    fn system_mut(&mut self, system_address: u64) -> &mut SystemScan {
        let strategy = self.config.signals.dedup_strategy;
        self.systems.entry(system_address).or_insert_with(|| SystemScan {
            signals: SignalAggregator::with_strategy(strategy),
            ..SystemScan::default()
        })
    }

    /// Owned view of one system, `None` if nothing was recorded for it.
    pub fn snapshot(&self, system_address: u64) -> Option<SystemSnapshot> {
        let scan = self.systems.get(&system_address)?;
        let signals = scan.signals.materialize();
        let signal_counts = CategoryCounts::from_records(&signals);

        Some(SystemSnapshot {
            system_address,
            signals,
            signal_counts,
            organics: scan
                .organics
                .iter()
                .map(|(&body_id, reducer)| (body_id, reducer.progress()))
                .collect(),
            surface: scan.surface.values().cloned().collect(),
            discovery: scan.discovery.clone(),
            identifier_generation: self.identifiers.generation(),
        })
    }

    /// Raw signal batches for one system, in arrival order.
    pub fn signal_batches(&self, system_address: u64) -> &[SignalBatch] {
        self.systems
            .get(&system_address)
            .map(|scan| scan.signals.batches())
            .unwrap_or_default()
    }

    /// Addresses of every system seen, ascending.
    pub fn systems(&self) -> impl Iterator<Item = u64> + '_ {
        self.systems.keys().copied()
    }

    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    pub fn identifiers(&self) -> &IdentifierCache {
        &self.identifiers
    }
}
