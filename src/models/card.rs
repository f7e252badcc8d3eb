use serde::{Deserialize, Serialize};

use super::EntryKey;
use crate::grading::GradeVerdict;
use crate::ledger::{Countable, LedgerRecord};

// ---------------------------------------------------------------------------
// CardEntry -- one owned single on the price/grading ledger
// ---------------------------------------------------------------------------

/// Prices are `None` when the pricing site had no value for the card; the
/// grading verdict is derived from the PSA 10 price and never written
/// independently of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardEntry {
    #[serde(rename = "Card_Name")]
    pub name: String,
    #[serde(rename = "Set_Name")]
    pub set_name: String,
    #[serde(rename = "url")]
    pub url: String,
    #[serde(rename = "ungraded_price")]
    pub ungraded_price: Option<f64>,
    #[serde(rename = "PSA10_price")]
    pub psa10_price: Option<f64>,
    #[serde(rename = "grade_yn")]
    pub grade_verdict: GradeVerdict,
    #[serde(rename = "quantity")]
    pub quantity: u32,
}

impl CardEntry {
    /// Build a fresh entry from a first price lookup. New cards start at
    /// quantity 1.
    pub fn new(
        name: String,
        set_name: String,
        url: String,
        ungraded_price: Option<f64>,
        psa10_price: Option<f64>,
    ) -> Self {
        Self {
            name,
            set_name,
            url,
            ungraded_price,
            psa10_price,
            grade_verdict: GradeVerdict::assess(psa10_price),
            quantity: 1,
        }
    }

    /// Overwrite both prices and recompute the grading verdict.
    pub fn set_prices(&mut self, ungraded_price: Option<f64>, psa10_price: Option<f64>) {
        self.ungraded_price = ungraded_price;
        self.psa10_price = psa10_price;
        self.grade_verdict = GradeVerdict::assess(psa10_price);
    }
}

impl LedgerRecord for CardEntry {
    type Key = EntryKey;

    const HEADERS: &'static [&'static str] = &[
        "Card_Name",
        "Set_Name",
        "url",
        "ungraded_price",
        "PSA10_price",
        "grade_yn",
        "quantity",
    ];

    fn key(&self) -> EntryKey {
        EntryKey {
            name: self.name.clone(),
            set_name: self.set_name.clone(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn absorb(&mut self, incoming: Self) {
        self.url = incoming.url;
        self.set_prices(incoming.ungraded_price, incoming.psa10_price);
        self.quantity = incoming.quantity;
    }
}

impl Countable for CardEntry {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}
