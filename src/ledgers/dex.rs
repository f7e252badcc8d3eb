//! National-dex checklist operations.
//!
//! The checklist documents one owned card per species, keyed by the
//! normalized species name. Dex numbers always come from the read-only
//! reference table, and every successful operation reports the binder
//! position for the number so the physical card can be filed.

use crate::binder::{self, PageSlot};
use crate::config;
use crate::dexref::normalize_species;
use crate::error::{Result, TrackerError};
use crate::ledger::Ledger;
use crate::models::DexEntry;
use crate::CollectionTracker;

// ---------------------------------------------------------------------------
// CardDetails
// ---------------------------------------------------------------------------

/// User-supplied details of the physical card documenting a species.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    pub set_name: String,
    pub foil: bool,
    pub full_art: bool,
    pub url: String,
}

/// Result of documenting a species.
#[derive(Debug, Clone, PartialEq)]
pub struct DexRecordOutcome {
    pub entry: DexEntry,
    /// False when an existing card's details were replaced.
    pub created: bool,
    pub position: PageSlot,
}

// ---------------------------------------------------------------------------
// DexLedger
// ---------------------------------------------------------------------------

/// Operations on the national-dex checklist.
pub struct DexLedger<'a> {
    tracker: &'a CollectionTracker,
}

impl<'a> DexLedger<'a> {
    pub(crate) fn new(tracker: &'a CollectionTracker) -> Self {
        Self { tracker }
    }

    fn load(&self) -> Result<Ledger<DexEntry>> {
        self.tracker.store().load(config::DEX_LEDGER_FILE)
    }

    fn save(&self, ledger: &Ledger<DexEntry>) -> Result<()> {
        self.tracker.store().save(config::DEX_LEDGER_FILE, ledger)
    }

    // -- Lookup ------------------------------------------------------------

    pub fn list(&self) -> Result<Vec<DexEntry>> {
        Ok(self.load()?.into_rows())
    }

    /// Resolve a species against the national dex reference.
    ///
    /// Returns the dex number and the normalized name. A species missing
    /// from the reference is `NotFound` -- the checklist never invents
    /// numbers.
    pub fn resolve_species(&self, species: &str) -> Result<(u32, String)> {
        let dexref = self.tracker.national_dex()?;
        let normalized = normalize_species(species);
        match dexref.number_for(&normalized) {
            Some(number) => Ok((number, normalized)),
            None => Err(TrackerError::NotFound(format!(
                "{} is not in the national dex",
                normalized
            ))),
        }
    }

    /// Current record for a species, with its binder position, if documented.
    pub fn find(&self, species: &str) -> Result<Option<(DexEntry, PageSlot)>> {
        let normalized = normalize_species(species);
        let ledger = self.load()?;
        match ledger.find_by_key(&normalized) {
            Some(entry) => {
                let position = binder::page_slot(entry.dex_number)?;
                Ok(Some((entry.clone(), position)))
            }
            None => Ok(None),
        }
    }

    /// Look up a documented card by species name or dex number and report
    /// where it lives in the binder.
    pub fn lookup(&self, query: &str) -> Result<(DexEntry, PageSlot)> {
        let ledger = self.load()?;
        let entry = match query.trim().parse::<u32>() {
            Ok(number) => ledger
                .rows()
                .iter()
                .find(|entry| entry.dex_number == number)
                .cloned()
                .ok_or_else(|| {
                    TrackerError::NotFound(format!(
                        "no card recorded for dex number {}",
                        number
                    ))
                })?,
            Err(_) => {
                let name = normalize_species(query);
                ledger.find_by_key(&name).cloned().ok_or_else(|| {
                    TrackerError::NotFound(format!("no card recorded for {}", name))
                })?
            }
        };
        let position = binder::page_slot(entry.dex_number)?;
        Ok((entry, position))
    }

    /// Name <-> number resolution against the reference table only; the
    /// checklist itself is not consulted.
    pub fn reference_lookup(&self, query: &str) -> Result<(u32, String)> {
        let dexref = self.tracker.national_dex()?;
        match query.trim().parse::<u32>() {
            Ok(number) => dexref
                .name_for(number)
                .map(|name| (number, name.to_string()))
                .ok_or_else(|| {
                    TrackerError::NotFound(format!(
                        "no species has dex number {}",
                        number
                    ))
                }),
            Err(_) => {
                let name = normalize_species(query);
                dexref
                    .number_for(&name)
                    .map(|number| (number, name.clone()))
                    .ok_or_else(|| {
                        TrackerError::NotFound(format!(
                            "{} has no national dex number",
                            name
                        ))
                    })
            }
        }
    }

    // -- Mutation ----------------------------------------------------------

    /// Document a species for the first time, or replace its card details.
    ///
    /// Dispatches add-vs-replace on ledger membership -- a species is never
    /// documented twice. Returns the stored entry, whether it was created,
    /// and the binder position for filing the card.
    pub fn record(&self, species: &str, details: CardDetails) -> Result<DexRecordOutcome> {
        let (number, name) = self.resolve_species(species)?;
        let mut ledger = self.load()?;

        let incoming = DexEntry {
            dex_number: number,
            species: name,
            set_name: details.set_name,
            foil: details.foil,
            full_art: details.full_art,
            url: details.url,
        };
        let (stored, created) = ledger.upsert(incoming);
        let entry = stored.clone();
        self.save(&ledger)?;

        let position = binder::page_slot(number)?;
        Ok(DexRecordOutcome {
            entry,
            created,
            position,
        })
    }
}
