use starlog_core::models::Category;
use starlog_core::traits::Classifier;
use starlog_signals::SignalTypeClassifier;

fn classify(name: &str, signal_type: Option<&str>, is_station: bool, localised: Option<&str>) -> Category {
    SignalTypeClassifier::new().classify(name, signal_type, is_station, localised)
}

#[test]
fn signal_type_takes_precedence() {
    assert_eq!(classify("Jameson Memorial", Some("StationCoriolis"), true, None), Category::Station);
    assert_eq!(classify("ABC HQ K7Q-BQL", Some("FleetCarrier"), true, None), Category::Carrier);
    assert_eq!(classify("Gnosis", Some("Megaship"), false, None), Category::Megaship);
    assert_eq!(classify("Listening Post", Some("Installation"), false, None), Category::Installation);
    assert_eq!(classify("$Warzone_PointRace_Med;", Some("Combat"), false, None), Category::ConflictZone);
    assert_eq!(
        classify("$MULTIPLAYER_SCENARIO14_TITLE;", Some("ResourceExtraction"), false, None),
        Category::ResourceExtraction
    );
    assert_eq!(
        classify("$Fixed_Event_Life_Cloud;", Some("Codex"), false, None),
        Category::NotableStellarPhenomena
    );
    assert_eq!(classify("$USS_Type_Salvage;", Some("USS"), false, None), Category::Uss);
    assert_eq!(classify("Hub", Some("Outpost"), true, None), Category::Station);
}

#[test]
fn reported_type_wins_over_station_flag() {
    assert_eq!(classify("Hub XKQ-12B", Some("FleetCarrier"), true, Some("Hub")), Category::Carrier);
    assert_eq!(classify("Gnosis", Some("Megaship"), true, None), Category::Megaship);
    assert_eq!(classify("Hub", Some("Unrecognised"), true, None), Category::Station);
    assert_eq!(classify("Vanguard XKQ-12B", None, true, None), Category::Carrier);
    assert_eq!(classify("Vanguard XKQ-12B", None, true, Some("Vanguard")), Category::Station);
}

#[test]
fn names_classify_without_a_type() {
    assert_eq!(classify("$USS_ThreatLevel:#threatLevel=1;", None, false, None), Category::Uss);
    assert_eq!(classify("$Warzone_PointRace_High;", None, false, None), Category::ConflictZone);
    assert_eq!(
        classify("$multiplayer_scenario78_title;", None, false, Some("Resource Extraction Site [High]")),
        Category::ResourceExtraction
    );
    assert_eq!(
        classify("$Fixed_Event_Life_Ring;", None, false, Some("Notable stellar phenomena")),
        Category::NotableStellarPhenomena
    );
}

#[test]
fn carrier_call_sign_without_localisation() {
    assert_eq!(classify("K7Q-BQL", None, false, None), Category::Carrier);
    assert_eq!(classify("Hyperion X2Z-9TJ", None, true, None), Category::Carrier);
    assert_eq!(classify("Hyperion X2Z-9TJ", None, true, Some("Hyperion")), Category::Station);
}

#[test]
fn unknown_falls_into_other() {
    assert_eq!(classify("$MULTIPLAYER_SCENARIO42_TITLE;", None, false, Some("Nav Beacon")), Category::Other);
    assert_eq!(classify("Something New", Some("Titan"), false, None), Category::Other);
    assert_eq!(classify("Plain Station", None, true, None), Category::Station);
}
