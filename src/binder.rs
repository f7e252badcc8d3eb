//! Binder position arithmetic.
//!
//! A collection binder holds nine cards per page in a 3x3 pocket grid.
//! Slots are numbered 1-9, left to right, top to bottom:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//! ```
//!
//! Cards are filed in national-dex order, so a dex number doubles as the
//! 1-based sequence index into the binder.
//!
//! # Example
//!
//! ```rust
//! use pokebinder::binder;
//!
//! let pos = binder::page_slot(25).unwrap();
//! assert_eq!((pos.page, pos.slot), (3, 7));
//! assert_eq!(binder::sequence_index(pos).unwrap(), 25);
//! ```

use crate::error::{Result, TrackerError};
use std::fmt;

/// Pockets per binder page.
pub const SLOTS_PER_PAGE: u32 = 9;
/// Grid side length; pages are square.
pub const GRID_SIDE: u32 = 3;

// ---------------------------------------------------------------------------
// PageSlot
// ---------------------------------------------------------------------------

/// A physical binder position: 1-based page number and slot 1-9 on that page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlot {
    pub page: u32,
    pub slot: u32,
}

impl fmt::Display for PageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {}, slot {}", self.page, self.slot)
    }
}

// ---------------------------------------------------------------------------
// Mapping functions
// ---------------------------------------------------------------------------

/// Convert a slot number (1-9) to its `(row, col)` grid cell, both 0-2.
pub fn slot_to_grid(slot: u32) -> Result<(u32, u32)> {
    if !(1..=SLOTS_PER_PAGE).contains(&slot) {
        return Err(TrackerError::OutOfRange(format!(
            "slot must be between 1 and {}, got {}",
            SLOTS_PER_PAGE, slot
        )));
    }
    Ok(((slot - 1) / GRID_SIDE, (slot - 1) % GRID_SIDE))
}

/// Convert a `(row, col)` grid cell back to its slot number.
pub fn grid_to_slot(row: u32, col: u32) -> Result<u32> {
    if row >= GRID_SIDE || col >= GRID_SIDE {
        return Err(TrackerError::OutOfRange(format!(
            "grid cell ({}, {}) is outside the {}x{} page",
            row, col, GRID_SIDE, GRID_SIDE
        )));
    }
    Ok(row * GRID_SIDE + col + 1)
}

/// Map a 1-based sequence index to its binder page and slot.
///
/// Items pack nine per page. An index that is an exact multiple of nine is
/// the *last* slot of page `index / 9`, not the first slot of the next page.
pub fn page_slot(index: u32) -> Result<PageSlot> {
    if index == 0 {
        return Err(TrackerError::OutOfRange(
            "sequence index is 1-based; 0 has no binder position".to_string(),
        ));
    }
    let quotient = index / SLOTS_PER_PAGE;
    let remainder = index % SLOTS_PER_PAGE;
    if remainder == 0 {
        Ok(PageSlot {
            page: quotient,
            slot: SLOTS_PER_PAGE,
        })
    } else {
        Ok(PageSlot {
            page: quotient + 1,
            slot: remainder,
        })
    }
}

/// Map a binder position back to its 1-based sequence index.
pub fn sequence_index(position: PageSlot) -> Result<u32> {
    if position.page == 0 || !(1..=SLOTS_PER_PAGE).contains(&position.slot) {
        return Err(TrackerError::OutOfRange(format!(
            "no sequence index for {}",
            position
        )));
    }
    Ok((position.page - 1) * SLOTS_PER_PAGE + position.slot)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render a page diagram with the occupied slot starred.
///
/// Pure render-to-string; printing is the caller's concern.
///
/// ```text
/// Page 3
/// +---+---+---+
/// | 1 | 2 | 3 |
/// +---+---+---+
/// | 4 | 5 | 6 |
/// +---+---+---+
/// | * | 8 | 9 |
/// +---+---+---+
/// ```
pub fn render_page(position: PageSlot) -> String {
    let rule = "+---+---+---+\n";
    let mut out = format!("Page {}\n", position.page);
    for row in 0..GRID_SIDE {
        out.push_str(rule);
        for col in 0..GRID_SIDE {
            let slot = row * GRID_SIDE + col + 1;
            if slot == position.slot {
                out.push_str("| * ");
            } else {
                out.push_str(&format!("| {} ", slot));
            }
        }
        out.push_str("|\n");
    }
    out.push_str(rule);
    out
}
