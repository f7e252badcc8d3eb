//! CSV persistence for the collection ledgers.
//!
//! The consistency model is deliberately simple: load the whole table,
//! mutate in memory, write the whole table back. Saves go to a temp file
//! first and are renamed into place, so an interrupted write never leaves a
//! truncated ledger behind -- either the whole table round-trips or the
//! operation did not happen.

use crate::error::{Result, TrackerError};
use crate::ledger::{Ledger, LedgerRecord};
use std::fs;
use std::path::{Path, PathBuf};

/// Owns the data directory and moves ledger snapshots in and out of it.
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Create a store rooted at `data_dir`, creating the directory if needed.
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Absolute path of a ledger file inside the data directory.
    pub fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Load a full ledger snapshot.
    ///
    /// Columns are matched by header name, so column order in the file is
    /// not load-bearing. A missing file is `NotFound` -- ledgers are created
    /// explicitly via [`init`](Self::init), never on first write.
    pub fn load<R: LedgerRecord>(&self, file: &str) -> Result<Ledger<R>> {
        let path = self.path(file);
        if !path.exists() {
            return Err(TrackerError::NotFound(format!(
                "ledger file {} does not exist; run init first",
                path.display()
            )));
        }
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&path)?;
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }
        Ok(Ledger::from_rows(rows))
    }

    /// Write a full ledger snapshot, atomically replacing the file.
    pub fn save<R: LedgerRecord>(&self, file: &str, ledger: &Ledger<R>) -> Result<()> {
        self.write_rows(&self.path(file), R::HEADERS, ledger.rows())
    }

    /// Create an empty, header-only ledger file.
    ///
    /// Returns `false` without touching anything if the file already exists.
    pub fn init<R: LedgerRecord>(&self, file: &str) -> Result<bool> {
        let path = self.path(file);
        if path.exists() {
            return Ok(false);
        }
        self.write_rows::<R>(&path, R::HEADERS, &[])?;
        Ok(true)
    }

    fn write_rows<R: LedgerRecord>(
        &self,
        path: &Path,
        headers: &[&str],
        rows: &[R],
    ) -> Result<()> {
        let tmp = path.with_extension("csv.tmp");

        let result = (|| -> Result<()> {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(&tmp)?;
            writer.write_record(headers)?;
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
            drop(writer);
            fs::rename(&tmp, path)?;
            Ok(())
        })();

        if result.is_err() {
            // Clean up the partial temp file on any error
            let _ = fs::remove_file(&tmp);
        }

        result
    }
}
