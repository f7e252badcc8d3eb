//! Integration tests for CSV persistence: init, atomic save, round trips.

mod common;

use pokebinder::ledgers::CardDetails;
use pokebinder::{config, CollectionTracker, GradeVerdict, TrackerError};
use std::fs;

#[test]
fn init_creates_header_only_ledgers_once() {
    let tmp = tempfile::tempdir().unwrap();
    let tracker = CollectionTracker::builder()
        .data_dir(tmp.path())
        .build()
        .unwrap();

    let created = tracker.init_ledgers().unwrap();
    assert_eq!(created.len(), 3);

    // A second run touches nothing.
    assert!(tracker.init_ledgers().unwrap().is_empty());

    let header = fs::read_to_string(tmp.path().join(config::CARD_LEDGER_FILE)).unwrap();
    assert_eq!(
        header.trim_end(),
        "Card_Name,Set_Name,url,ungraded_price,PSA10_price,grade_yn,quantity"
    );
}

#[test]
fn missing_ledger_file_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let tracker = CollectionTracker::builder()
        .data_dir(tmp.path())
        .build()
        .unwrap();

    match tracker.cards().list() {
        Err(TrackerError::NotFound(msg)) => assert!(msg.contains("init")),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn card_rows_round_trip_with_optional_prices() {
    let (tracker, _tmp) = common::setup_tracker();
    common::seed_cards(
        &tracker,
        vec![
            common::sample_card("Charizard", "Base Set", Some(1234.56)),
            common::sample_card("Magikarp", "151", None),
        ],
    );

    let rows = tracker.cards().list().unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].psa10_price, Some(1234.56));
    assert_eq!(rows[0].grade_verdict, GradeVerdict::Worthwhile);

    assert_eq!(rows[1].psa10_price, None);
    assert_eq!(rows[1].grade_verdict, GradeVerdict::Unknown);
    assert_eq!(rows[1].quantity, 1);
}

#[test]
fn verdict_column_round_trips_as_yes_no_unknown() {
    let (tracker, tmp) = common::setup_tracker();
    common::seed_cards(
        &tracker,
        vec![
            common::sample_card("Charizard", "Base Set", Some(1234.56)),
            common::sample_card("Caterpie", "Base Set", Some(1.25)),
            common::sample_card("Magikarp", "151", None),
        ],
    );

    let raw = fs::read_to_string(tmp.path().join(config::CARD_LEDGER_FILE)).unwrap();
    let lines: Vec<&str> = raw.lines().collect();
    assert!(lines[1].contains(",Yes,"));
    assert!(lines[2].contains(",No,"));
    assert!(lines[3].contains(",Unknown,"));
}

#[test]
fn dex_flags_round_trip_as_yes_no() {
    let (tracker, tmp) = common::setup_tracker();
    tracker
        .dex()
        .record(
            "Charmander",
            CardDetails {
                set_name: "151".to_string(),
                foil: true,
                full_art: false,
                url: "https://example.test/charmander".to_string(),
            },
        )
        .unwrap();

    let raw = fs::read_to_string(tmp.path().join(config::DEX_LEDGER_FILE)).unwrap();
    assert!(raw.lines().nth(1).unwrap().contains(",yes,no,"));

    let rows = tracker.dex().list().unwrap();
    assert!(rows[0].foil);
    assert!(!rows[0].full_art);
}

#[test]
fn saves_leave_no_temp_files_behind() {
    let (tracker, tmp) = common::setup_tracker();
    common::seed_cards(
        &tracker,
        vec![common::sample_card("Pikachu", "151", Some(10.0))],
    );
    common::seed_products(&tracker, vec![common::sample_product("Elite Trainer Box", "151", 49.99)]);

    let leftovers: Vec<_> = fs::read_dir(tmp.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == "tmp")
                .unwrap_or(false)
        })
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn column_order_is_not_load_bearing() {
    let (tracker, tmp) = common::setup_tracker();

    // Rewrite the product ledger with its columns shuffled.
    let csv = "quantity,url,Product_Name,market_price,Set_Name,MSRP\n\
               2,https://example.test/etb,Elite Trainer Box,74.99,151,49.99\n";
    fs::write(tmp.path().join(config::PRODUCT_LEDGER_FILE), csv).unwrap();

    let rows = tracker.products().list().unwrap();
    assert_eq!(rows[0].name, "Elite Trainer Box");
    assert_eq!(rows[0].msrp, 49.99);
    assert_eq!(rows[0].market_price, Some(74.99));
    assert_eq!(rows[0].quantity, 2);
}
