//! Owned-singles ledger operations.
//!
//! Every mutating operation is a load-snapshot / mutate / atomic-save round
//! trip; a failed save leaves the file untouched and the operation is
//! considered not to have happened.

use super::RefreshSummary;
use crate::config;
use crate::error::{Result, TrackerError};
use crate::ledger::{Ledger, LedgerRecord, QuantityUpdate, Selector};
use crate::models::{CardEntry, EntryKey};
use crate::CollectionTracker;

// ---------------------------------------------------------------------------
// CardOutcome
// ---------------------------------------------------------------------------

/// Result of an add-by-URL: the page's (name, set) pair dispatches between
/// creating a row and handing the existing one back for the caller to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum CardOutcome {
    Added(CardEntry),
    AlreadyOwned(CardEntry),
}

// ---------------------------------------------------------------------------
// CardLedger
// ---------------------------------------------------------------------------

/// Operations on the owned-singles ledger.
pub struct CardLedger<'a> {
    tracker: &'a CollectionTracker,
}

impl<'a> CardLedger<'a> {
    pub(crate) fn new(tracker: &'a CollectionTracker) -> Self {
        Self { tracker }
    }

    fn load(&self) -> Result<Ledger<CardEntry>> {
        self.tracker.store().load(config::CARD_LEDGER_FILE)
    }

    fn save(&self, ledger: &Ledger<CardEntry>) -> Result<()> {
        self.tracker.store().save(config::CARD_LEDGER_FILE, ledger)
    }

    // -- Lookup ------------------------------------------------------------

    /// Full table snapshot in row order.
    pub fn list(&self) -> Result<Vec<CardEntry>> {
        Ok(self.load()?.into_rows())
    }

    pub fn get(&self, key: &EntryKey) -> Result<CardEntry> {
        self.load()?
            .find_by_key(key)
            .cloned()
            .ok_or_else(|| TrackerError::NotFound(format!("no card entry for {}", key)))
    }

    // -- Mutation ----------------------------------------------------------

    /// Add a card by its pricing-page URL.
    ///
    /// The page heading supplies the (name, set) key. A pair already on the
    /// ledger comes back as `AlreadyOwned` so the caller can offer a price
    /// or quantity update instead; a new pair gets both prices fetched and
    /// is stored with quantity 1.
    pub fn add_from_url(&self, url: &str) -> Result<CardOutcome> {
        let mut ledger = self.load()?;

        let identity = self.tracker.fetcher().identify(url)?;
        let (name, set_name) = match (identity.name, identity.set_name) {
            (Some(name), Some(set_name)) => (name, set_name),
            _ => {
                return Err(TrackerError::InvalidInput(format!(
                    "could not read a card name and set from {}",
                    url
                )))
            }
        };

        let key = EntryKey { name, set_name };
        if let Some(existing) = ledger.find_by_key(&key) {
            return Ok(CardOutcome::AlreadyOwned(existing.clone()));
        }

        let (ungraded, psa10) = self.tracker.fetcher().card_quote(url)?;
        let entry = CardEntry::new(key.name, key.set_name, url.to_string(), ungraded, psa10);
        ledger.insert(entry.clone())?;
        self.save(&ledger)?;
        Ok(CardOutcome::Added(entry))
    }

    /// Re-fetch both prices for an entry and recompute its grading verdict.
    pub fn refresh_price(&self, key: &EntryKey) -> Result<CardEntry> {
        let mut ledger = self.load()?;
        let url = ledger
            .find_by_key(key)
            .map(|entry| entry.url.clone())
            .ok_or_else(|| TrackerError::NotFound(format!("no card entry for {}", key)))?;

        let (ungraded, psa10) = self.tracker.fetcher().card_quote(&url)?;
        let updated = ledger
            .update(key, |entry| entry.set_prices(ungraded, psa10))?
            .clone();
        self.save(&ledger)?;
        Ok(updated)
    }

    /// Re-fetch prices for the row at a positional index.
    pub fn refresh_price_at(&self, index: usize) -> Result<CardEntry> {
        self.refresh_price(&self.key_at(index)?)
    }

    /// Apply a quantity mutation to an entry.
    pub fn set_quantity(&self, key: &EntryKey, update: QuantityUpdate) -> Result<CardEntry> {
        let mut ledger = self.load()?;
        let updated = ledger.adjust_quantity(key, update)?.clone();
        self.save(&ledger)?;
        Ok(updated)
    }

    pub fn set_quantity_at(&self, index: usize, update: QuantityUpdate) -> Result<CardEntry> {
        self.set_quantity(&self.key_at(index)?, update)
    }

    /// Remove an entry and return it. A name selector matching several sets
    /// fails with `Ambiguous` and leaves the table unchanged.
    pub fn remove(&self, selector: &Selector<EntryKey>) -> Result<CardEntry> {
        let mut ledger = self.load()?;
        let removed = ledger.remove(selector)?;
        self.save(&ledger)?;
        Ok(removed)
    }

    /// Refresh every entry in row order, pausing between fetches per the
    /// pacing policy.
    ///
    /// Each row is persisted as soon as it updates; a row whose fetch fails
    /// is reported and counted, never aborting the sweep.
    pub fn refresh_all<F>(&self, mut progress: F) -> Result<RefreshSummary>
    where
        F: FnMut(usize, &CardEntry),
    {
        let keys: Vec<EntryKey> = self.load()?.rows().iter().map(LedgerRecord::key).collect();
        let mut summary = RefreshSummary::default();
        for (index, key) in keys.iter().enumerate() {
            if index > 0 {
                self.tracker.fetcher().pause();
            }
            match self.refresh_price(key) {
                Ok(entry) => {
                    summary.updated += 1;
                    progress(index, &entry);
                }
                Err(err) => {
                    eprintln!("Skipping {}: {}", key, err);
                    summary.failed += 1;
                }
            }
        }
        Ok(summary)
    }

    fn key_at(&self, index: usize) -> Result<EntryKey> {
        let ledger = self.load()?;
        ledger
            .get(index)
            .map(LedgerRecord::key)
            .ok_or_else(|| {
                TrackerError::NotFound(format!(
                    "no card row at index {} ({} rows)",
                    index,
                    ledger.len()
                ))
            })
    }
}
