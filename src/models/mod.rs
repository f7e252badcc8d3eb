pub mod card;
pub mod dex;
pub mod product;

pub use card::*;
pub use dex::*;
pub use product::*;

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EntryKey -- shared (name, set) uniqueness key
// ---------------------------------------------------------------------------

/// Uniqueness key for the card and product ledgers.
///
/// The same name recurs across sets (reprints, promos), so uniqueness is
/// scoped to the pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryKey {
    pub name: String,
    pub set_name: String,
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.set_name)
    }
}

// ---------------------------------------------------------------------------
// yes/no flag columns
// ---------------------------------------------------------------------------

/// Serde adapter for the `foil_flag` / `full_art_flag` CSV columns, which
/// store `yes` / `no` rather than booleans.
pub(crate) mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "yes" } else { "no" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "yes" | "y" | "yup" | "true" | "1"
        ))
    }
}
