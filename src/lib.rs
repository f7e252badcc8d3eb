//! Personal Pokémon TCG collection tracker.
//!
//! Keeps three CSV-backed ledgers -- a national-dex completion checklist, an
//! owned-singles price/grading ledger, and a sealed-product ledger -- plus
//! the binder arithmetic that maps a dex number onto a page and slot of a
//! 3x3-pocket binder. Prices come from a PriceCharting-style pricing site.
//!
//! # Quick start
//!
//! ```no_run
//! use pokebinder::CollectionTracker;
//!
//! let tracker = CollectionTracker::builder().build().unwrap();
//! tracker.init_ledgers().unwrap();
//!
//! // Where does Pikachu belong in the binder?
//! let (entry, position) = tracker.dex().lookup("25").unwrap();
//! println!("{} sits at {}", entry.species, position);
//! ```

pub mod binder;
pub mod config;
pub mod dexref;
pub mod error;
pub mod grading;
pub mod html;
pub mod ledger;
pub mod ledgers;
pub mod models;
pub mod pricing;
pub mod store;

pub use error::{Result, TrackerError};
pub use grading::GradeVerdict;
pub use ledger::{Ledger, LedgerRecord, QuantityUpdate, Selector};
pub use ledgers::{CardLedger, CardOutcome, DexLedger, ProductLedger, ProductOutcome};
pub use models::{CardEntry, DexEntry, EntryKey, ProductEntry};
pub use pricing::{Pacing, PriceFetcher};
pub use store::Store;

use crate::dexref::NationalDex;
use std::cell::{RefCell, RefMut};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// CollectionTrackerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CollectionTracker`].
///
/// Use [`CollectionTracker::builder()`] to obtain a builder, chain
/// configuration methods, and call [`build()`](Self::build).
pub struct CollectionTrackerBuilder {
    data_dir: Option<PathBuf>,
    timeout: Duration,
    pacing: Pacing,
}

impl Default for CollectionTrackerBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            timeout: Duration::from_secs(30),
            pacing: Pacing::default(),
        }
    }
}

impl CollectionTrackerBuilder {
    /// Set a custom data directory.
    ///
    /// If not set, the platform-appropriate default data directory is used
    /// (e.g. `~/.local/share/pokebinder` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the HTTP request timeout for pricing-site fetches.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the delay policy between consecutive bulk-refresh fetches.
    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Build the tracker, creating the data directory if needed.
    ///
    /// No ledger files are created here -- see
    /// [`init_ledgers()`](CollectionTracker::init_ledgers) -- and no network
    /// traffic happens until a price operation runs.
    pub fn build(self) -> Result<CollectionTracker> {
        let dir = self.data_dir.unwrap_or_else(config::default_data_dir);
        let store = Store::new(dir)?;
        let fetcher = PriceFetcher::new(self.timeout, self.pacing);
        Ok(CollectionTracker {
            store,
            fetcher: RefCell::new(fetcher),
        })
    }
}

// ---------------------------------------------------------------------------
// CollectionTracker
// ---------------------------------------------------------------------------

/// The main entry point for the collection tracker.
///
/// Owns the CSV store and the price fetcher, and exposes each ledger's
/// operations as a lightweight borrowing wrapper.
pub struct CollectionTracker {
    store: Store,
    fetcher: RefCell<PriceFetcher>,
}

impl CollectionTracker {
    /// Create a new builder for configuring the tracker.
    pub fn builder() -> CollectionTrackerBuilder {
        CollectionTrackerBuilder::default()
    }

    // -- Ledger accessors --------------------------------------------------

    /// Access the national-dex checklist operations.
    pub fn dex(&self) -> DexLedger<'_> {
        DexLedger::new(self)
    }

    /// Access the owned-singles ledger operations.
    pub fn cards(&self) -> CardLedger<'_> {
        CardLedger::new(self)
    }

    /// Access the sealed-product ledger operations.
    pub fn products(&self) -> ProductLedger<'_> {
        ProductLedger::new(self)
    }

    // -- Collaborators -----------------------------------------------------

    /// The CSV store backing all three ledgers.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Load the read-only national dex reference table.
    pub fn national_dex(&self) -> Result<NationalDex> {
        NationalDex::load(&self.store.path(config::NATIONAL_DEX_FILE))
    }

    pub(crate) fn fetcher(&self) -> RefMut<'_, PriceFetcher> {
        self.fetcher.borrow_mut()
    }

    // -- Setup -------------------------------------------------------------

    /// Create any missing ledger files, header-only.
    ///
    /// Returns the paths that were newly created. Existing files are never
    /// touched. The national dex reference is not created here -- it is
    /// external data the user supplies.
    pub fn init_ledgers(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        if self.store.init::<DexEntry>(config::DEX_LEDGER_FILE)? {
            created.push(self.store.path(config::DEX_LEDGER_FILE));
        }
        if self.store.init::<CardEntry>(config::CARD_LEDGER_FILE)? {
            created.push(self.store.path(config::CARD_LEDGER_FILE));
        }
        if self.store.init::<ProductEntry>(config::PRODUCT_LEDGER_FILE)? {
            created.push(self.store.path(config::PRODUCT_LEDGER_FILE));
        }
        Ok(created)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CollectionTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CollectionTracker(data_dir={})",
            self.store.data_dir().display()
        )
    }
}
