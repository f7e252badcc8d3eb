use serde::{Deserialize, Serialize};

use super::EntryKey;
use crate::ledger::{Countable, LedgerRecord};

// ---------------------------------------------------------------------------
// ProductEntry -- one owned sealed product
// ---------------------------------------------------------------------------

/// MSRP is what was paid at acquisition and stays fixed; only the market
/// price is refreshed from the pricing site. No grading concept applies to
/// sealed product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    #[serde(rename = "Product_Name")]
    pub name: String,
    #[serde(rename = "Set_Name")]
    pub set_name: String,
    #[serde(rename = "url")]
    pub url: String,
    #[serde(rename = "MSRP")]
    pub msrp: f64,
    #[serde(rename = "market_price")]
    pub market_price: Option<f64>,
    #[serde(rename = "quantity")]
    pub quantity: u32,
}

impl ProductEntry {
    pub fn new(
        name: String,
        set_name: String,
        url: String,
        msrp: f64,
        market_price: Option<f64>,
        quantity: u32,
    ) -> Self {
        Self {
            name,
            set_name,
            url,
            msrp,
            market_price,
            quantity,
        }
    }
}

impl LedgerRecord for ProductEntry {
    type Key = EntryKey;

    const HEADERS: &'static [&'static str] = &[
        "Product_Name",
        "Set_Name",
        "url",
        "MSRP",
        "market_price",
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
        // MSRP is fixed at acquisition and survives payload updates.
        self.url = incoming.url;
        self.market_price = incoming.market_price;
        self.quantity = incoming.quantity;
    }
}

impl Countable for ProductEntry {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}
