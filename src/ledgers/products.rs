//! Sealed-product ledger operations.
//!
//! Same persistence discipline as the card ledger. Sealed product has one
//! market price (refreshed under the site's `Ungraded` label) and an MSRP
//! fixed at acquisition; nothing here touches the grading policy.

use super::RefreshSummary;
use crate::config;
use crate::error::{Result, TrackerError};
use crate::ledger::{Ledger, LedgerRecord, QuantityUpdate, Selector};
use crate::models::{EntryKey, ProductEntry};
use crate::CollectionTracker;

// ---------------------------------------------------------------------------
// ProductOutcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ProductOutcome {
    Added(ProductEntry),
    AlreadyOwned(ProductEntry),
}

// ---------------------------------------------------------------------------
// ProductLedger
// ---------------------------------------------------------------------------

/// Operations on the sealed-product ledger.
pub struct ProductLedger<'a> {
    tracker: &'a CollectionTracker,
}

impl<'a> ProductLedger<'a> {
    pub(crate) fn new(tracker: &'a CollectionTracker) -> Self {
        Self { tracker }
    }

    fn load(&self) -> Result<Ledger<ProductEntry>> {
        self.tracker.store().load(config::PRODUCT_LEDGER_FILE)
    }

    fn save(&self, ledger: &Ledger<ProductEntry>) -> Result<()> {
        self.tracker
            .store()
            .save(config::PRODUCT_LEDGER_FILE, ledger)
    }

    // -- Lookup ------------------------------------------------------------

    pub fn list(&self) -> Result<Vec<ProductEntry>> {
        Ok(self.load()?.into_rows())
    }

    pub fn get(&self, key: &EntryKey) -> Result<ProductEntry> {
        self.load()?
            .find_by_key(key)
            .cloned()
            .ok_or_else(|| TrackerError::NotFound(format!("no product entry for {}", key)))
    }

    // -- Mutation ----------------------------------------------------------

    /// Add a sealed product by its pricing-page URL.
    ///
    /// MSRP and owned quantity come from the caller -- MSRP is what was paid
    /// at acquisition, not a scraped value. A pair already on the ledger
    /// comes back as `AlreadyOwned`.
    pub fn add_from_url(&self, url: &str, msrp: f64, quantity: u32) -> Result<ProductOutcome> {
        if !url.starts_with("https://") {
            return Err(TrackerError::InvalidInput(format!(
                "product url must start with https://, got {}",
                url
            )));
        }
        if msrp.is_nan() || msrp < 0.0 {
            return Err(TrackerError::InvalidInput(format!(
                "MSRP must be a non-negative number, got {}",
                msrp
            )));
        }

        let mut ledger = self.load()?;

        let identity = self.tracker.fetcher().identify(url)?;
        let (name, set_name) = match (identity.name, identity.set_name) {
            (Some(name), Some(set_name)) => (name, set_name),
            _ => {
                return Err(TrackerError::InvalidInput(format!(
                    "could not read a product name and set from {}",
                    url
                )))
            }
        };

        let key = EntryKey { name, set_name };
        if let Some(existing) = ledger.find_by_key(&key) {
            return Ok(ProductOutcome::AlreadyOwned(existing.clone()));
        }

        let market = self
            .tracker
            .fetcher()
            .quote(url, config::LABEL_UNGRADED)?;
        let entry = ProductEntry::new(
            key.name,
            key.set_name,
            url.to_string(),
            msrp,
            market,
            quantity,
        );
        ledger.insert(entry.clone())?;
        self.save(&ledger)?;
        Ok(ProductOutcome::Added(entry))
    }

    /// Re-fetch the market price for an entry.
    pub fn refresh_price(&self, key: &EntryKey) -> Result<ProductEntry> {
        let mut ledger = self.load()?;
        let url = ledger
            .find_by_key(key)
            .map(|entry| entry.url.clone())
            .ok_or_else(|| TrackerError::NotFound(format!("no product entry for {}", key)))?;

        let market = self
            .tracker
            .fetcher()
            .quote(&url, config::LABEL_UNGRADED)?;
        let updated = ledger
            .update(key, |entry| entry.market_price = market)?
            .clone();
        self.save(&ledger)?;
        Ok(updated)
    }

    pub fn refresh_price_at(&self, index: usize) -> Result<ProductEntry> {
        self.refresh_price(&self.key_at(index)?)
    }

    pub fn set_quantity(&self, key: &EntryKey, update: QuantityUpdate) -> Result<ProductEntry> {
        let mut ledger = self.load()?;
        let updated = ledger.adjust_quantity(key, update)?.clone();
        self.save(&ledger)?;
        Ok(updated)
    }

    pub fn set_quantity_at(&self, index: usize, update: QuantityUpdate) -> Result<ProductEntry> {
        self.set_quantity(&self.key_at(index)?, update)
    }

    pub fn remove(&self, selector: &Selector<EntryKey>) -> Result<ProductEntry> {
        let mut ledger = self.load()?;
        let removed = ledger.remove(selector)?;
        self.save(&ledger)?;
        Ok(removed)
    }

    /// Refresh every entry in row order, pausing between fetches.
    pub fn refresh_all<F>(&self, mut progress: F) -> Result<RefreshSummary>
    where
        F: FnMut(usize, &ProductEntry),
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
                    "no product row at index {} ({} rows)",
                    index,
                    ledger.len()
                ))
            })
    }
}
