use serde::{Deserialize, Serialize};

use super::yes_no;
use crate::ledger::LedgerRecord;

// ---------------------------------------------------------------------------
// DexEntry -- one documented species in the national-dex checklist
// ---------------------------------------------------------------------------

/// A species is either undocumented or documented exactly once; replacing a
/// card mutates the existing row. The checklist has no removal operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DexEntry {
    #[serde(rename = "nat_dex_num")]
    pub dex_number: u32,
    #[serde(rename = "pokemon_name")]
    pub species: String,
    #[serde(rename = "set_name")]
    pub set_name: String,
    #[serde(rename = "foil_flag", with = "yes_no")]
    pub foil: bool,
    #[serde(rename = "full_art_flag", with = "yes_no")]
    pub full_art: bool,
    #[serde(rename = "url")]
    pub url: String,
}

impl LedgerRecord for DexEntry {
    type Key = String;

    const HEADERS: &'static [&'static str] = &[
        "nat_dex_num",
        "pokemon_name",
        "set_name",
        "foil_flag",
        "full_art_flag",
        "url",
    ];

    fn key(&self) -> String {
        self.species.clone()
    }

    fn name(&self) -> &str {
        &self.species
    }

    fn absorb(&mut self, incoming: Self) {
        // Species and dex number identify the row; the card details replace.
        self.set_name = incoming.set_name;
        self.foil = incoming.foil;
        self.full_art = incoming.full_art;
        self.url = incoming.url;
    }
}
