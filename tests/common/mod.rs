//! Shared fixtures for the collection tracker integration tests.
//!
//! Provides `setup_tracker()`, which builds a tracker over a fresh temp data
//! directory with empty ledgers and a small national dex reference table.
//! The caller must keep the `TempDir` alive for the duration of the test so
//! the data directory is not deleted prematurely.

use pokebinder::{config, CardEntry, CollectionTracker, ProductEntry};
use std::fs;
use std::path::Path;

pub fn setup_tracker() -> (CollectionTracker, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    write_national_dex(tmp_dir.path());

    let tracker = CollectionTracker::builder()
        .data_dir(tmp_dir.path())
        .build()
        .unwrap();
    tracker.init_ledgers().unwrap();

    (tracker, tmp_dir)
}

/// A handful of reference rows; enough for name and number lookups.
pub fn write_national_dex(dir: &Path) {
    let csv = "national_dex_num,NAME\n\
               1,Bulbasaur\n\
               4,Charmander\n\
               7,Squirtle\n\
               9,Blastoise\n\
               25,Pikachu\n\
               150,Mewtwo\n";
    fs::write(dir.join(config::NATIONAL_DEX_FILE), csv).unwrap();
}

pub fn sample_card(name: &str, set_name: &str, psa10_price: Option<f64>) -> CardEntry {
    CardEntry::new(
        name.to_string(),
        set_name.to_string(),
        format!(
            "https://example.test/game/{}",
            name.to_lowercase().replace(' ', "-")
        ),
        Some(3.50),
        psa10_price,
    )
}

pub fn sample_product(name: &str, set_name: &str, msrp: f64) -> ProductEntry {
    ProductEntry::new(
        name.to_string(),
        set_name.to_string(),
        format!(
            "https://example.test/product/{}",
            name.to_lowercase().replace(' ', "-")
        ),
        msrp,
        Some(msrp * 1.5),
        1,
    )
}

/// Seed the card ledger directly through the store, bypassing the network
/// add path.
pub fn seed_cards(tracker: &CollectionTracker, rows: Vec<CardEntry>) {
    let mut ledger = tracker
        .store()
        .load::<CardEntry>(config::CARD_LEDGER_FILE)
        .unwrap();
    for row in rows {
        ledger.insert(row).unwrap();
    }
    tracker
        .store()
        .save(config::CARD_LEDGER_FILE, &ledger)
        .unwrap();
}

pub fn seed_products(tracker: &CollectionTracker, rows: Vec<ProductEntry>) {
    let mut ledger = tracker
        .store()
        .load::<ProductEntry>(config::PRODUCT_LEDGER_FILE)
        .unwrap();
    for row in rows {
        ledger.insert(row).unwrap();
    }
    tracker
        .store()
        .save(config::PRODUCT_LEDGER_FILE, &ledger)
        .unwrap();
}
