//! Generic ledger semantics shared by the three collection tables.
//!
//! A ledger is an in-memory row vector with a uniqueness key. Rows keep
//! insertion order; removal compacts, so positional indices stay dense
//! `0..len`. Every entry is either absent or present exactly once --
//! `upsert` routes a colliding key to an in-place update instead of a
//! second row.

use crate::error::{Result, TrackerError};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Record traits
// ---------------------------------------------------------------------------

/// A row type storable in a [`Ledger`].
pub trait LedgerRecord: Clone + Serialize + DeserializeOwned {
    /// Owned uniqueness key. At most one row per key value.
    type Key: Clone + PartialEq + fmt::Display;

    /// CSV header row, in field declaration order.
    const HEADERS: &'static [&'static str];

    fn key(&self) -> Self::Key;

    /// Display name matched by name-based selectors. Unlike the key, a name
    /// may recur across rows (same card in several sets).
    fn name(&self) -> &str;

    /// Apply an incoming payload onto this row, recomputing derived fields.
    /// Identity fields (the key) are left untouched.
    fn absorb(&mut self, incoming: Self);
}

/// Rows that carry an owned-copies count.
pub trait Countable {
    fn quantity(&self) -> u32;
    fn set_quantity(&mut self, quantity: u32);
}

// ---------------------------------------------------------------------------
// Selectors and mutations
// ---------------------------------------------------------------------------

/// How a caller points at a row.
#[derive(Debug, Clone)]
pub enum Selector<K> {
    /// Full uniqueness key; matches at most one row.
    Key(K),
    /// Display name; ambiguous when the name recurs across sets.
    Name(String),
    /// Positional index into the current dense row order.
    Index(usize),
}

/// Quantity mutation modes.
#[derive(Debug, Clone, Copy)]
pub enum QuantityUpdate {
    /// Add exactly one to the current count.
    AddOne,
    /// Set the count outright. Negative values are rejected with
    /// `InvalidInput`; the row is left untouched.
    Set(i64),
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

/// In-memory snapshot of one collection table.
#[derive(Debug, Clone)]
pub struct Ledger<R: LedgerRecord> {
    rows: Vec<R>,
}

impl<R: LedgerRecord> Default for Ledger<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R: LedgerRecord> Ledger<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // -- Lookup ------------------------------------------------------------

    pub fn find_by_key(&self, key: &R::Key) -> Option<&R> {
        self.position_of(key).map(|i| &self.rows[i])
    }

    pub fn contains(&self, key: &R::Key) -> bool {
        self.position_of(key).is_some()
    }

    /// Row at a positional index in the current dense ordering.
    pub fn get(&self, index: usize) -> Option<&R> {
        self.rows.get(index)
    }

    fn position_of(&self, key: &R::Key) -> Option<usize> {
        self.rows.iter().position(|row| row.key() == *key)
    }

    /// Resolve a selector to a positional index.
    ///
    /// A name selector matching more than one row fails with `Ambiguous`;
    /// the caller must re-select by full key or index.
    pub fn resolve(&self, selector: &Selector<R::Key>) -> Result<usize> {
        match selector {
            Selector::Key(key) => self.position_of(key).ok_or_else(|| {
                TrackerError::NotFound(format!("no entry for {}", key))
            }),
            Selector::Index(index) => {
                if *index < self.rows.len() {
                    Ok(*index)
                } else {
                    Err(TrackerError::NotFound(format!(
                        "no row at index {} ({} rows)",
                        index,
                        self.rows.len()
                    )))
                }
            }
            Selector::Name(name) => {
                let matches: Vec<usize> = self
                    .rows
                    .iter()
                    .enumerate()
                    .filter(|(_, row)| row.name() == name.as_str())
                    .map(|(i, _)| i)
                    .collect();
                match matches.len() {
                    0 => Err(TrackerError::NotFound(format!(
                        "no entry named '{}'",
                        name
                    ))),
                    1 => Ok(matches[0]),
                    n => Err(TrackerError::Ambiguous(format!(
                        "{} entries named '{}'; select by set name or row index",
                        n, name
                    ))),
                }
            }
        }
    }

    // -- Mutation ----------------------------------------------------------

    /// Insert a new row or apply the payload onto the existing one.
    ///
    /// Returns the stored row and whether it was created. This is the only
    /// write path that dispatches add-vs-update; it can never duplicate a
    /// key.
    pub fn upsert(&mut self, record: R) -> (&R, bool) {
        match self.position_of(&record.key()) {
            Some(index) => {
                self.rows[index].absorb(record);
                (&self.rows[index], false)
            }
            None => {
                self.rows.push(record);
                (self.rows.last().expect("row just pushed"), true)
            }
        }
    }

    /// Insert a row whose key must not already be present.
    pub fn insert(&mut self, record: R) -> Result<&R> {
        let key = record.key();
        if self.contains(&key) {
            return Err(TrackerError::Ambiguous(format!(
                "{} already has an entry; update it instead",
                key
            )));
        }
        self.rows.push(record);
        Ok(self.rows.last().expect("row just pushed"))
    }

    /// Mutate the row for `key` in place.
    pub fn update<F>(&mut self, key: &R::Key, apply: F) -> Result<&R>
    where
        F: FnOnce(&mut R),
    {
        let index = self.position_of(key).ok_or_else(|| {
            TrackerError::NotFound(format!("no entry for {}", key))
        })?;
        apply(&mut self.rows[index]);
        Ok(&self.rows[index])
    }

    /// Remove the row a selector points at and return it.
    ///
    /// `Vec::remove` shifts the tail down, so surviving indices stay dense.
    pub fn remove(&mut self, selector: &Selector<R::Key>) -> Result<R> {
        let index = self.resolve(selector)?;
        Ok(self.rows.remove(index))
    }
}

impl<R: LedgerRecord + Countable> Ledger<R> {
    /// Apply a quantity mutation to the row for `key`.
    pub fn adjust_quantity(&mut self, key: &R::Key, update: QuantityUpdate) -> Result<&R> {
        let index = self.position_of(key).ok_or_else(|| {
            TrackerError::NotFound(format!("no entry for {}", key))
        })?;
        let next = match update {
            QuantityUpdate::AddOne => self.rows[index].quantity().saturating_add(1),
            QuantityUpdate::Set(count) => {
                if count < 0 {
                    return Err(TrackerError::InvalidInput(format!(
                        "quantity cannot be negative, got {}",
                        count
                    )));
                }
                u32::try_from(count).map_err(|_| {
                    TrackerError::InvalidInput(format!("quantity {} is too large", count))
                })?
            }
        };
        self.rows[index].set_quantity(next);
        Ok(&self.rows[index])
    }
}
