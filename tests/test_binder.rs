//! Unit tests for the binder position arithmetic.

use pokebinder::binder::{self, PageSlot};
use pokebinder::TrackerError;

// ---------------------------------------------------------------------------
// Slot <-> grid
// ---------------------------------------------------------------------------

#[test]
fn slots_fill_left_to_right_top_to_bottom() {
    assert_eq!(binder::slot_to_grid(1).unwrap(), (0, 0));
    assert_eq!(binder::slot_to_grid(3).unwrap(), (0, 2));
    assert_eq!(binder::slot_to_grid(4).unwrap(), (1, 0));
    assert_eq!(binder::slot_to_grid(5).unwrap(), (1, 1));
    assert_eq!(binder::slot_to_grid(9).unwrap(), (2, 2));
}

#[test]
fn slot_grid_round_trips_for_every_slot() {
    for slot in 1..=9 {
        let (row, col) = binder::slot_to_grid(slot).unwrap();
        assert_eq!(binder::grid_to_slot(row, col).unwrap(), slot);
    }
}

#[test]
fn slot_zero_is_out_of_range() {
    assert!(matches!(
        binder::slot_to_grid(0),
        Err(TrackerError::OutOfRange(_))
    ));
}

#[test]
fn slot_ten_is_out_of_range() {
    assert!(matches!(
        binder::slot_to_grid(10),
        Err(TrackerError::OutOfRange(_))
    ));
}

#[test]
fn grid_cell_off_the_page_is_out_of_range() {
    assert!(matches!(
        binder::grid_to_slot(3, 0),
        Err(TrackerError::OutOfRange(_))
    ));
    assert!(matches!(
        binder::grid_to_slot(0, 3),
        Err(TrackerError::OutOfRange(_))
    ));
}

// ---------------------------------------------------------------------------
// Sequence index <-> page and slot
// ---------------------------------------------------------------------------

#[test]
fn first_item_opens_page_one() {
    assert_eq!(binder::page_slot(1).unwrap(), PageSlot { page: 1, slot: 1 });
}

#[test]
fn ninth_item_closes_page_one() {
    assert_eq!(binder::page_slot(9).unwrap(), PageSlot { page: 1, slot: 9 });
}

#[test]
fn tenth_item_opens_page_two() {
    assert_eq!(binder::page_slot(10).unwrap(), PageSlot { page: 2, slot: 1 });
}

#[test]
fn eighteenth_item_closes_page_two() {
    assert_eq!(binder::page_slot(18).unwrap(), PageSlot { page: 2, slot: 9 });
}

#[test]
fn index_zero_has_no_binder_position() {
    assert!(matches!(
        binder::page_slot(0),
        Err(TrackerError::OutOfRange(_))
    ));
}

#[test]
fn sequence_index_inverts_page_slot() {
    for index in 1..=120 {
        let position = binder::page_slot(index).unwrap();
        assert_eq!(binder::sequence_index(position).unwrap(), index);
    }
}

#[test]
fn sequence_index_rejects_invalid_positions() {
    assert!(matches!(
        binder::sequence_index(PageSlot { page: 0, slot: 1 }),
        Err(TrackerError::OutOfRange(_))
    ));
    assert!(matches!(
        binder::sequence_index(PageSlot { page: 1, slot: 10 }),
        Err(TrackerError::OutOfRange(_))
    ));
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn render_captions_the_page_and_stars_the_slot() {
    let out = binder::render_page(PageSlot { page: 3, slot: 7 });
    assert!(out.starts_with("Page 3\n"));
    assert!(out.contains("| * | 8 | 9 |"));
    assert!(!out.contains("| 7 "));
}

#[test]
fn render_keeps_the_other_slots_numbered() {
    let out = binder::render_page(PageSlot { page: 1, slot: 1 });
    assert!(out.contains("| * | 2 | 3 |"));
    assert!(out.contains("| 4 | 5 | 6 |"));
    assert!(out.contains("| 7 | 8 | 9 |"));
}
