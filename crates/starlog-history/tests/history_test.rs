use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use starlog_core::config::{DedupStrategy, StarlogConfig};
use starlog_core::models::{
    Category, DiscoveryProgress, OrganicObservation, OrganicScanRecord, ScanType,
    SignalObservation, SignalRecord, SurfaceSignal, SurfaceSignalReport, SurfaceSource,
};
use starlog_core::{StarlogError, ValidationError};
use starlog_history::{History, JournalEvent};
use starlog_organics::StageLabel;
use starlog_signals::SignalBatch;

const SOL: u64 = 10_477_373_803;
const ACHENAR: u64 = 164_098_653;

fn t(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(3309, 4, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes)
}

fn signal_at(name: &str, localised: Option<&str>, category: Category, minutes: i64) -> SignalRecord {
    let mut obs = SignalObservation::named(name);
    obs.signal_name_localised = localised.map(str::to_string);
    obs.time_remaining = Some(600.0);
    SignalRecord::from_observation(obs, t(minutes), &category).unwrap()
}

fn signal(name: &str, minutes: i64) -> JournalEvent {
    JournalEvent::SignalDiscovered(signal_at(name, None, Category::Other, minutes))
}

fn organic(body: i32, genus: &str, scan_type: ScanType, minutes: i64) -> JournalEvent {
    let mut obs = OrganicObservation::new(genus, format!("{genus} Species"), scan_type);
    obs.body = body;
    JournalEvent::OrganicScan(OrganicScanRecord::from_observation(obs, t(minutes), &()))
}

fn surface(body: &str, source: SurfaceSource, bio: u32) -> JournalEvent {
    JournalEvent::SurfaceSignals(SurfaceSignalReport {
        system_address: SOL,
        body_name: body.to_string(),
        body_id: Some(1),
        source,
        recorded_at: t(0),
        signals: vec![SurfaceSignal::new(
            "$SAA_SignalType_Biological;",
            Some("Biological".to_string()),
            bio,
        )],
        genuses: Vec::new(),
    })
}

fn ungrouped() -> StarlogConfig {
    let mut config = StarlogConfig::default();
    config.signals.group_same_timestamp = false;
    config
}

// ── Routing ───────────────────────────────────────────────────────────────

#[test]
fn unknown_system_has_no_snapshot() {
    let history = History::default();
    assert!(history.snapshot(SOL).is_none());
    assert_eq!(history.system_count(), 0);
}

#[test]
fn events_land_in_their_own_system() {
    let mut history = History::default();
    history.apply(SOL, signal("Abraham Lincoln", 0)).unwrap();
    history.apply(ACHENAR, signal("Dawes Hub", 1)).unwrap();

    let sol = history.snapshot(SOL).unwrap();
    let achenar = history.snapshot(ACHENAR).unwrap();
    assert_eq!(sol.signals[0].name(), "Abraham Lincoln");
    assert_eq!(achenar.signals[0].name(), "Dawes Hub");
    assert_eq!(history.systems().collect::<Vec<_>>(), vec![ACHENAR, SOL]);
}

#[test]
fn organic_scans_are_reduced_per_body() {
    let mut history = History::default();
    history.apply(SOL, organic(1, "Bacterium", ScanType::Log, 0)).unwrap();
    history.apply(SOL, organic(2, "Stratum", ScanType::Log, 1)).unwrap();
    history.apply(SOL, organic(1, "Bacterium", ScanType::Sample, 2)).unwrap();

    let snapshot = history.snapshot(SOL).unwrap();
    let body1 = snapshot.organic_progress(1);
    assert_eq!(body1.len(), 1, "scanning another body does not purge body 1");
    assert_eq!(body1[0].label, StageLabel::Sampled);
    assert_eq!(snapshot.organic_progress(2)[0].label, StageLabel::Logged);
    assert!(snapshot.organic_progress(3).is_empty());
}

#[test]
fn analysed_value_sums_completed_organisms() {
    let mut history = History::default();
    let table = starlog_organics::SpeciesValueTable::new(t(-60))
        .with_species("Bacterium Species", 1, 1_000_000)
        .with_species("Stratum Species", 1, 19_010_800);
    for (genus, scan_type) in [
        ("Bacterium", ScanType::Analyse),
        ("Stratum", ScanType::Analyse),
        ("Tussock", ScanType::Log),
    ] {
        let obs = OrganicObservation::new(genus, format!("{genus} Species"), scan_type);
        let record = OrganicScanRecord::from_observation(obs, t(0), &table);
        history.apply(SOL, JournalEvent::OrganicScan(record)).unwrap();
    }
    assert_eq!(history.snapshot(SOL).unwrap().analysed_value(), 20_010_800);
}

#[test]
fn surface_reports_keep_latest_per_body_and_source() {
    let mut history = History::default();
    history.apply(SOL, surface("Earth", SurfaceSource::Scanned, 2)).unwrap();
    history.apply(SOL, surface("Earth", SurfaceSource::Mapped, 2)).unwrap();
    history.apply(SOL, surface("Earth", SurfaceSource::Scanned, 5)).unwrap();
    history.apply(SOL, surface("Moon", SurfaceSource::Scanned, 1)).unwrap();

    let snapshot = history.snapshot(SOL).unwrap();
    assert_eq!(snapshot.surface.len(), 3);
    let earth_scanned = snapshot
        .surface
        .iter()
        .find(|r| r.body_name == "Earth" && r.source == SurfaceSource::Scanned)
        .unwrap();
    assert_eq!(earth_scanned.signals[0].count, 5);
}

#[test]
fn surface_report_without_body_is_rejected_and_changes_nothing() {
    let mut history = History::default();
    let err = history.apply(SOL, surface("", SurfaceSource::Mapped, 1)).unwrap_err();
    assert!(matches!(
        err,
        StarlogError::ValidationError(ValidationError::MissingField { field: "body_name", .. })
    ));
    assert!(history.snapshot(SOL).is_none());
    assert_eq!(history.identifiers().generation(), 0);
}

#[test]
fn all_bodies_found_survives_later_discovery_progress() {
    let mut history = History::default();
    history
        .apply(SOL, JournalEvent::AllBodiesFound { system_address: SOL, count: 42 })
        .unwrap();
    history
        .apply(SOL, JournalEvent::DiscoveryScan(DiscoveryProgress::from_fraction(1.0, 40, 2)))
        .unwrap();

    let discovery = history.snapshot(SOL).unwrap().discovery.unwrap();
    assert_eq!(discovery.all_bodies_found, Some(42));
    assert_eq!(discovery.body_count, 40);
    assert!(discovery.is_complete());
}

// ── Signal grouping ───────────────────────────────────────────────────────

#[test]
fn same_timestamp_signals_share_a_batch() {
    let mut history = History::default();
    history.apply(SOL, signal("Abraham Lincoln", 0)).unwrap();
    history.apply(SOL, signal("Daedalus", 0)).unwrap();
    history.apply(SOL, signal("Galileo", 1)).unwrap();

    let batches = history.signal_batches(SOL);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 2);
    assert_eq!(batches[1].len(), 1);
}

#[test]
fn grouping_can_be_disabled() {
    let mut history = History::new(ungrouped());
    history.apply(SOL, signal("Abraham Lincoln", 0)).unwrap();
    history.apply(SOL, signal("Daedalus", 0)).unwrap();
    assert_eq!(history.signal_batches(SOL).len(), 2);
}

#[test]
fn grouped_duplicates_keep_the_first_reported() {
    let mut history = History::default();
    for localised in ["first", "second"] {
        let record = signal_at("Carrier-1", Some(localised), Category::Carrier, 0);
        history.apply(SOL, JournalEvent::SignalDiscovered(record)).unwrap();
    }
    let signals = history.snapshot(SOL).unwrap().signals;
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].localised_name(), "first");
}

#[test]
fn ungrouped_duplicates_keep_the_last_reported() {
    let mut history = History::new(ungrouped());
    for localised in ["first", "second"] {
        let record = signal_at("Carrier-1", Some(localised), Category::Carrier, 0);
        history.apply(SOL, JournalEvent::SignalDiscovered(record)).unwrap();
    }
    let signals = history.snapshot(SOL).unwrap().signals;
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].localised_name(), "second");
}

#[test]
fn intervening_event_ends_the_group() {
    let mut history = History::default();
    history.apply(SOL, signal("Abraham Lincoln", 0)).unwrap();
    history.apply(SOL, organic(1, "Bacterium", ScanType::Log, 0)).unwrap();
    history.apply(SOL, signal("Daedalus", 0)).unwrap();
    assert_eq!(history.signal_batches(SOL).len(), 2);
}

#[test]
fn signal_in_another_system_ends_the_group() {
    let mut history = History::default();
    history.apply(SOL, signal("Abraham Lincoln", 0)).unwrap();
    history.apply(ACHENAR, signal("Dawes Hub", 0)).unwrap();
    history.apply(SOL, signal("Daedalus", 0)).unwrap();
    assert_eq!(history.signal_batches(SOL).len(), 2);
    assert_eq!(history.signal_batches(ACHENAR).len(), 1);
}

#[test]
fn multi_record_event_is_one_batch() {
    let mut history = History::default();
    let batch = SignalBatch::new(vec![
        signal_at("$USS;", Some("Unidentified signal source"), Category::Uss, 0),
        signal_at("$Warzone_PointRace_Low;", Some("Conflict Zone [Low]"), Category::ConflictZone, 0),
    ])
    .unwrap();
    history.apply(SOL, JournalEvent::SignalsDiscovered(batch)).unwrap();

    assert_eq!(history.signal_batches(SOL).len(), 1);
    assert_eq!(history.identifiers().generation(), 2);
    assert_eq!(history.identifiers().get("$uss;"), "Unidentified signal source");
}

// ── Identifier contribution ───────────────────────────────────────────────

#[test]
fn every_occurrence_contributes_before_grouping() {
    let mut history = History::default();
    history
        .apply(SOL, JournalEvent::SignalDiscovered(signal_at("$USS;", Some("USS"), Category::Uss, 0)))
        .unwrap();
    history
        .apply(
            SOL,
            JournalEvent::SignalDiscovered(signal_at("$Fixed_Event_Life_Ring;", Some("Notable phenomena"), Category::NotableStellarPhenomena, 0)),
        )
        .unwrap();

    assert_eq!(history.signal_batches(SOL).len(), 1, "grouped into one batch");
    assert_eq!(history.identifiers().generation(), 2, "but each occurrence contributed");
    assert_eq!(
        history.identifiers().get("$FIXED_EVENT_LIFE_RING;"),
        "Notable phenomena"
    );
}

#[test]
fn snapshot_reports_identifier_generation() {
    let mut history = History::default();
    history.apply(SOL, surface("Earth", SurfaceSource::Mapped, 1)).unwrap();
    history.apply(SOL, surface("Earth", SurfaceSource::Mapped, 2)).unwrap();
    assert_eq!(history.snapshot(SOL).unwrap().identifier_generation, 2);
}

// ── Snapshots and replay ──────────────────────────────────────────────────

#[test]
fn snapshot_is_detached_from_later_events() {
    let mut history = History::default();
    history.apply(SOL, signal("Abraham Lincoln", 0)).unwrap();
    let before = history.snapshot(SOL).unwrap();
    history.apply(SOL, signal("Daedalus", 5)).unwrap();

    assert_eq!(before.signals.len(), 1);
    assert_eq!(history.snapshot(SOL).unwrap().signals.len(), 2);
}

#[test]
fn snapshot_counts_materialised_signals() {
    let mut history = History::default();
    history
        .apply(SOL, JournalEvent::SignalDiscovered(signal_at("Carrier-1", None, Category::Carrier, 0)))
        .unwrap();
    history
        .apply(SOL, JournalEvent::SignalDiscovered(signal_at("Carrier-1", None, Category::Carrier, 30)))
        .unwrap();
    let snapshot = history.snapshot(SOL).unwrap();
    assert_eq!(snapshot.signal_counts.get(Category::Carrier), 1);
    assert_eq!(snapshot.signal_counts.total(), snapshot.signals.len());
}

#[test]
fn replay_into_fresh_history_is_equal() {
    let events = vec![
        (SOL, signal("Abraham Lincoln", 0)),
        (SOL, signal("Daedalus", 0)),
        (SOL, organic(1, "Bacterium", ScanType::Log, 1)),
        (ACHENAR, signal("Dawes Hub", 2)),
        (SOL, surface("Earth", SurfaceSource::Scanned, 3)),
        (SOL, organic(1, "Bacterium", ScanType::Sample, 4)),
    ];
    let a = History::replay(StarlogConfig::default(), events.clone()).unwrap();
    let b = History::replay(StarlogConfig::default(), events).unwrap();

    for system in [SOL, ACHENAR] {
        assert_eq!(a.snapshot(system), b.snapshot(system));
    }
    assert_eq!(a.identifiers(), b.identifiers());
}

#[test]
fn replay_stops_at_the_first_rejected_event() {
    let events = vec![
        (SOL, signal("Abraham Lincoln", 0)),
        (SOL, surface("", SurfaceSource::Scanned, 1)),
    ];
    assert!(History::replay(StarlogConfig::default(), events).is_err());
}

// ── Properties ────────────────────────────────────────────────────────────

fn arb_events() -> impl Strategy<Value = Vec<(u64, JournalEvent)>> {
    let names = prop::sample::select(vec!["Alpha", "Beta", "Gamma", "$USS;"]);
    let event = (names, 0i64..4, prop::bool::ANY, prop::bool::ANY).prop_map(
        |(name, minutes, carrier, other_system)| {
            let category = if carrier { Category::Carrier } else { Category::Uss };
            let system = if other_system { ACHENAR } else { SOL };
            (
                system,
                JournalEvent::SignalDiscovered(signal_at(name, Some("Localised"), category, minutes)),
            )
        },
    );
    prop::collection::vec(event, 0..40)
}

proptest! {
    #[test]
    fn prop_replay_is_deterministic(events in arb_events()) {
        let a = History::replay(StarlogConfig::default(), events.clone()).unwrap();
        let b = History::replay(StarlogConfig::default(), events).unwrap();
        for system in [SOL, ACHENAR] {
            prop_assert_eq!(a.snapshot(system), b.snapshot(system));
        }
    }

    #[test]
    fn prop_dedup_strategy_does_not_change_snapshot(events in arb_events()) {
        let mut bucketed = StarlogConfig::default();
        bucketed.signals.dedup_strategy = DedupStrategy::NameBucketed;
        let a = History::replay(StarlogConfig::default(), events.clone()).unwrap();
        let b = History::replay(bucketed, events).unwrap();
        for system in [SOL, ACHENAR] {
            prop_assert_eq!(a.snapshot(system), b.snapshot(system));
        }
    }
}
