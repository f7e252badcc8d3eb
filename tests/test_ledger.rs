//! Unit tests for the generic ledger semantics: uniqueness, add-vs-update
//! dispatch, positional indexing, and quantity contracts.

use pokebinder::{
    CardEntry, EntryKey, GradeVerdict, Ledger, QuantityUpdate, Selector, TrackerError,
};

fn card(name: &str, set_name: &str, psa10_price: Option<f64>) -> CardEntry {
    CardEntry::new(
        name.to_string(),
        set_name.to_string(),
        format!("https://example.test/game/{}", name.to_lowercase()),
        Some(2.50),
        psa10_price,
    )
}

fn key(name: &str, set_name: &str) -> EntryKey {
    EntryKey {
        name: name.to_string(),
        set_name: set_name.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Upsert dispatch
// ---------------------------------------------------------------------------

#[test]
fn upsert_same_key_updates_instead_of_duplicating() {
    let mut ledger = Ledger::new();

    let (_, created) = ledger.upsert(card("Pikachu", "151", Some(10.0)));
    assert!(created);

    let (entry, created) = ledger.upsert(card("Pikachu", "151", Some(100.0)));
    assert!(!created);
    assert_eq!(entry.psa10_price, Some(100.0));
    // Row count grew by exactly one across both calls.
    assert_eq!(ledger.len(), 1);
}

#[test]
fn upsert_recomputes_the_grading_verdict() {
    let mut ledger = Ledger::new();
    ledger.upsert(card("Pikachu", "151", Some(100.0)));

    let (entry, _) = ledger.upsert(card("Pikachu", "151", None));
    assert_eq!(entry.grade_verdict, GradeVerdict::Unknown);

    let (entry, _) = ledger.upsert(card("Pikachu", "151", Some(10.0)));
    assert_eq!(entry.grade_verdict, GradeVerdict::NotWorthwhile);
}

#[test]
fn same_name_in_another_set_is_a_second_row() {
    let mut ledger = Ledger::new();
    ledger.upsert(card("Pikachu", "151", Some(10.0)));
    ledger.upsert(card("Pikachu", "Surging Sparks", Some(20.0)));
    assert_eq!(ledger.len(), 2);
}

#[test]
fn insert_rejects_a_duplicate_key() {
    let mut ledger = Ledger::new();
    ledger.insert(card("Pikachu", "151", None)).unwrap();
    assert!(matches!(
        ledger.insert(card("Pikachu", "151", None)),
        Err(TrackerError::Ambiguous(_))
    ));
    assert_eq!(ledger.len(), 1);
}

// ---------------------------------------------------------------------------
// Removal and selectors
// ---------------------------------------------------------------------------

#[test]
fn remove_by_key_shrinks_the_table_by_one() {
    let mut ledger = Ledger::new();
    ledger.upsert(card("Pikachu", "151", None));
    ledger.upsert(card("Mewtwo", "151", None));

    let removed = ledger.remove(&Selector::Key(key("Pikachu", "151"))).unwrap();
    assert_eq!(removed.name, "Pikachu");
    assert_eq!(ledger.len(), 1);
}

#[test]
fn remove_by_name_with_two_sets_is_ambiguous_and_mutates_nothing() {
    let mut ledger = Ledger::new();
    ledger.upsert(card("Pikachu", "151", None));
    ledger.upsert(card("Pikachu", "Surging Sparks", None));

    assert!(matches!(
        ledger.remove(&Selector::Name("Pikachu".to_string())),
        Err(TrackerError::Ambiguous(_))
    ));
    assert_eq!(ledger.len(), 2);
}

#[test]
fn remove_by_unique_name_succeeds() {
    let mut ledger = Ledger::new();
    ledger.upsert(card("Pikachu", "151", None));
    ledger.upsert(card("Mewtwo", "151", None));

    let removed = ledger
        .remove(&Selector::Name("Mewtwo".to_string()))
        .unwrap();
    assert_eq!(removed.name, "Mewtwo");
    assert_eq!(ledger.len(), 1);
}

#[test]
fn remove_absent_key_is_not_found_and_mutates_nothing() {
    let mut ledger = Ledger::new();
    ledger.upsert(card("Pikachu", "151", None));

    assert!(matches!(
        ledger.remove(&Selector::Key(key("Mew", "151"))),
        Err(TrackerError::NotFound(_))
    ));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn remove_by_index_out_of_range_is_not_found() {
    let mut ledger: Ledger<CardEntry> = Ledger::new();
    assert!(matches!(
        ledger.remove(&Selector::Index(0)),
        Err(TrackerError::NotFound(_))
    ));
}

#[test]
fn removal_compacts_positional_indices() {
    let mut ledger = Ledger::new();
    ledger.upsert(card("Bulbasaur", "151", None));
    ledger.upsert(card("Charmander", "151", None));
    ledger.upsert(card("Squirtle", "151", None));

    ledger.remove(&Selector::Index(0)).unwrap();

    assert_eq!(ledger.get(0).unwrap().name, "Charmander");
    assert_eq!(ledger.get(1).unwrap().name, "Squirtle");
    assert!(ledger.get(2).is_none());
}

// ---------------------------------------------------------------------------
// Quantity contract
// ---------------------------------------------------------------------------

#[test]
fn add_one_increments_the_count() {
    let mut ledger = Ledger::new();
    ledger.upsert(card("Pikachu", "151", None));

    let entry = ledger
        .adjust_quantity(&key("Pikachu", "151"), QuantityUpdate::AddOne)
        .unwrap();
    assert_eq!(entry.quantity, 2);
}

#[test]
fn set_absolute_quantity() {
    let mut ledger = Ledger::new();
    ledger.upsert(card("Pikachu", "151", None));

    let entry = ledger
        .adjust_quantity(&key("Pikachu", "151"), QuantityUpdate::Set(7))
        .unwrap();
    assert_eq!(entry.quantity, 7);
}

#[test]
fn negative_quantity_is_invalid_and_leaves_the_row_unchanged() {
    let mut ledger = Ledger::new();
    ledger.upsert(card("Pikachu", "151", None));

    assert!(matches!(
        ledger.adjust_quantity(&key("Pikachu", "151"), QuantityUpdate::Set(-1)),
        Err(TrackerError::InvalidInput(_))
    ));
    assert_eq!(ledger.find_by_key(&key("Pikachu", "151")).unwrap().quantity, 1);
}

#[test]
fn adjust_quantity_on_absent_key_is_not_found() {
    let mut ledger: Ledger<CardEntry> = Ledger::new();
    assert!(matches!(
        ledger.adjust_quantity(&key("Pikachu", "151"), QuantityUpdate::AddOne),
        Err(TrackerError::NotFound(_))
    ));
}
