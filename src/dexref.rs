//! Read-only national dex reference data.
//!
//! Maps species names to national dex numbers. The table ships with the
//! user's data directory and is consumed by lookup flows but never written
//! by the tracker.

use crate::error::{Result, TrackerError};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct DexRef {
    #[serde(rename = "national_dex_num")]
    pub number: u32,
    #[serde(rename = "NAME")]
    pub name: String,
}

/// The full reference table, held in memory for the session.
pub struct NationalDex {
    rows: Vec<DexRef>,
}

impl NationalDex {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TrackerError::NotFound(format!(
                "national dex reference {} does not exist",
                path.display()
            )));
        }
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Dex number for a species. The caller normalizes the name first;
    /// a species with multiple listed forms resolves to its first row.
    pub fn number_for(&self, species: &str) -> Option<u32> {
        self.rows
            .iter()
            .find(|row| row.name == species)
            .map(|row| row.number)
    }

    /// Species name for a dex number.
    pub fn name_for(&self, number: u32) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.number == number)
            .map(|row| row.name.as_str())
    }
}

/// Normalize a species name the way users type it: surrounding whitespace
/// dropped, each word capitalized to match the reference table's casing.
pub fn normalize_species(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
