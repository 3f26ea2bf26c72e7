use chrono::{DateTime, TimeZone, Utc};
use starlog_core::config::SignalConfig;
use starlog_core::models::{
    Category, Genus, OrganicObservation, OrganicScanRecord, ScanType, SignalObservation,
    SignalRecord, SurfaceSignal, SurfaceSignalReport, SurfaceSource,
};
use starlog_history::{PlainSummary, SummaryFormatter};
use starlog_organics::{reduce, SpeciesValueTable};
use starlog_signals::SignalBatch;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(3309, 4, 1, 12, 0, 0).unwrap()
}

fn record(obs: SignalObservation, category: Category) -> SignalRecord {
    SignalRecord::from_observation(obs, t0(), &category).unwrap()
}

fn uss() -> SignalRecord {
    let mut obs = SignalObservation::named("$USS;");
    obs.signal_name_localised = Some("Unidentified signal source".into());
    obs.uss_type = Some("$USS_Type_Salvage;".into());
    obs.uss_type_localised = Some("Degraded emissions".into());
    obs.threat_level = Some(2);
    obs.time_remaining = Some(90.0);
    record(obs, Category::Uss)
}

fn aurasus(scan_type: ScanType, table: &SpeciesValueTable) -> OrganicScanRecord {
    let mut obs = OrganicObservation::new(
        "$Codex_Ent_Bacterial_Genus_Name;",
        "$Codex_Ent_Bacterial_02_Name;",
        scan_type,
    );
    obs.genus_localised = Some("Bacterium".into());
    obs.species_localised = Some("Bacterium Aurasus".into());
    obs.variant = Some("$Codex_Ent_Bacterial_02_Teal_Name;".into());
    obs.variant_localised = Some("Bacterium Aurasus - Teal".into());
    OrganicScanRecord::from_observation(obs, t0(), table)
}

fn table() -> SpeciesValueTable {
    SpeciesValueTable::new(t0()).with_species("$Codex_Ent_Bacterial_02_Name;", 500_000, 1_000_000)
}

// ── Signal lines ──────────────────────────────────────────────────────────

#[test]
fn station_line_is_tagged() {
    let station = record(SignalObservation::named("Hutton Orbital"), Category::Station);
    assert_eq!(PlainSummary::default().signal(&station), "Station: Hutton Orbital");
}

#[test]
fn uss_line_shows_type_threat_and_expiry_but_no_name() {
    let line = PlainSummary::default().signal(&uss());
    assert_eq!(
        line,
        "Degraded emissions, Threat Level: 2, Time: 3309-04-01 12:01:30"
    );
}

#[test]
fn carrier_line_shows_last_seen_instead_of_expiry() {
    let carrier = record(SignalObservation::named("Vanguard XKQ-12B"), Category::Carrier);
    let summary = PlainSummary::default();
    assert_eq!(
        summary.signal(&carrier),
        "Carrier: Vanguard XKQ-12B, Last Seen: 3309-04-01 12:00:00"
    );
    assert_eq!(
        summary.without_last_seen().signal(&carrier),
        "Carrier: Vanguard XKQ-12B"
    );
}

#[test]
fn faction_and_state_are_listed_and_long_state_is_truncated() {
    let mut obs = SignalObservation::named("$Warzone_PointRace_High;");
    obs.signal_name_localised = Some("Conflict Zone".into());
    obs.spawning_faction = Some("Mother Gaia".into());
    obs.spawning_state = Some("$FactionState_CivilWar_desc;".into());
    obs.spawning_state_localised = Some("A very long state description here".into());
    let line = PlainSummary::default().signal(&record(obs, Category::ConflictZone));
    assert_eq!(
        line,
        "Conflict Zone, Faction: Mother Gaia, State: A very long state description he.."
    );
}

#[test]
fn state_truncation_follows_config() {
    let mut obs = SignalObservation::named("Beacon");
    obs.spawning_state = Some("Boom".into());
    let config = SignalConfig {
        state_truncate_chars: 2,
        ..SignalConfig::default()
    };
    let line = PlainSummary::new(&config).signal(&record(obs, Category::Other));
    assert_eq!(line, "Beacon, State: Bo..");
}

// ── Batch lines ───────────────────────────────────────────────────────────

#[test]
fn single_record_batch_reads_as_its_signal() {
    let summary = PlainSummary::default();
    let batch = SignalBatch::single(uss());
    assert_eq!(summary.signal_batch(&batch), summary.signal(&uss()));
}

#[test]
fn batch_lists_names_below_the_limit() {
    let batch = SignalBatch::new(vec![
        record(SignalObservation::named("Hutton Orbital"), Category::Station),
        uss(),
    ])
    .unwrap();
    assert_eq!(
        PlainSummary::default().signal_batch(&batch),
        "Detected 2 signals, Hutton Orbital, Degraded emissions"
    );
}

#[test]
fn batch_at_the_limit_only_counts() {
    let config = SignalConfig {
        summary_max_signals: 2,
        ..SignalConfig::default()
    };
    let batch = SignalBatch::new(vec![
        record(SignalObservation::named("A"), Category::Other),
        record(SignalObservation::named("B"), Category::Other),
    ])
    .unwrap();
    assert_eq!(PlainSummary::new(&config).signal_batch(&batch), "Detected 2 signals");
}

// ── Organic lines ─────────────────────────────────────────────────────────

#[test]
fn organic_line_shows_stage_names_and_value() {
    let table = table();
    let progress = reduce(&[aurasus(ScanType::Log, &table), aurasus(ScanType::Analyse, &table)]);
    assert_eq!(
        PlainSummary::default().organic(&progress[0]),
        "3/3 Analyse: Bacterium Aurasus Teal, Value: 1,000,000 cr"
    );
}

#[test]
fn unfinished_organic_shows_potential_value() {
    let table = table();
    let progress = reduce(&[aurasus(ScanType::Sample, &table), aurasus(ScanType::Sample, &table)]);
    assert_eq!(
        PlainSummary::default().organic(&progress[0]),
        "2+/3 Sample: Bacterium Aurasus Teal, Potential Value: 1,000,000 cr"
    );
}

#[test]
fn unpriced_organic_has_no_value() {
    let obs = OrganicObservation::new("Fungoida", "Fungoida Setisis", ScanType::Log);
    let progress = reduce(&[OrganicScanRecord::from_observation(obs, t0(), &())]);
    assert_eq!(
        PlainSummary::default().organic(&progress[0]),
        "1/3 Log: Fungoida Setisis"
    );
}

// ── Surface lines ─────────────────────────────────────────────────────────

#[test]
fn surface_line_lists_signals_then_genuses() {
    let report = SurfaceSignalReport {
        system_address: 1,
        body_name: "Alpha 1 a".into(),
        body_id: Some(5),
        source: SurfaceSource::Mapped,
        recorded_at: t0(),
        signals: vec![
            SurfaceSignal::new("$SAA_SignalType_Biological;", Some("Biological".into()), 2),
            SurfaceSignal::new("$SAA_SignalType_Geological;", None, 1),
        ],
        genuses: vec![Genus::new("$Codex_Ent_Bacterial_Genus_Name;", Some("Bacterium".into()))],
    };
    assert_eq!(
        PlainSummary::default().surface(&report),
        "Biological: 2, $SAA_SignalType_Geological;: 1; Bacterium"
    );
}
