use std::path::PathBuf;

/// Sent on every pricing-site request; the site rejects the default
/// library user agent.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Price-table row labels on a pricing-site card page.
pub const LABEL_UNGRADED: &str = "Ungraded";
pub const LABEL_PSA10: &str = "PSA 10";

/// Ledger file names inside the data directory.
pub const DEX_LEDGER_FILE: &str = "dex_record.csv";
pub const CARD_LEDGER_FILE: &str = "poke_cards.csv";
pub const PRODUCT_LEDGER_FILE: &str = "poke_products.csv";

/// Read-only reference table mapping species names to national dex numbers.
/// Ships alongside the ledgers; never written by the tracker.
pub const NATIONAL_DEX_FILE: &str = "pokemon_dex_num.csv";

/// Recent expansion sets offered as a pick list when documenting a card.
/// Anything older goes through the free-text "Other" escape.
pub const RECENT_SETS: &[&str] = &[
    "Ascended Heroes",
    "Phantasmal Flames",
    "Mega Evolution",
    "White Flare",
    "Black Bolt",
    "Destined Rivals",
    "Journey Together",
    "Prismatic Evolutions",
    "Surging Sparks",
    "Stellar Crown",
    "Shrouded Fable",
    "Twilight Masquerade",
    "Temporal Forces",
    "Paldean Fates",
    "Paradox Rift",
    "151",
];

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("pokebinder")
    } else {
        PathBuf::from(".pokebinder")
    }
}
