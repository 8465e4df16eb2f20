//! # Storage
//!
//! Persists the checklist to a two-column CSV file:
//!
//! ```text
//! completed,content
//! false,Buy milk
//! true,"Call Ann, then Bob"
//! ```
//!
//! A missing file is created with just the header row. Saves write the whole
//! list to `<file>.tmp` and then `rename()` it over the target, so a crash mid
//! write never leaves a half-written list behind.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::todo::Item;

const HEADER: [&str; 2] = ["completed", "content"];

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    /// Unreadable CSV, including rows with the wrong number of columns.
    Csv(csv::Error),
    /// The first row is not `completed,content`.
    Header(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "storage I/O error: {e}"),
            StorageError::Csv(e) => write!(f, "malformed todo file: {e}"),
            StorageError::Header(found) => {
                write!(f, "unexpected header row \"{found}\" (expected \"completed,content\")")
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<csv::Error> for StorageError {
    fn from(e: csv::Error) -> Self {
        StorageError::Csv(e)
    }
}

// ============================================================================
// Records
// ============================================================================

#[derive(Deserialize, Debug)]
struct StoredRow {
    completed: String,
    content: String,
}

impl StoredRow {
    fn into_item(self) -> Item {
        Item::new(self.completed.eq_ignore_ascii_case("true"), self.content)
    }
}

#[derive(Serialize, Debug)]
struct StoredRowRef<'a> {
    completed: &'static str,
    content: &'a str,
}

impl<'a> From<&'a Item> for StoredRowRef<'a> {
    fn from(item: &'a Item) -> Self {
        Self {
            completed: if item.completed { "true" } else { "false" },
            content: &item.content,
        }
    }
}

// ============================================================================
// Storage
// ============================================================================

#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every item from disk.
    ///
    /// If the file does not exist yet, it is created with only the header row
    /// and an empty list is returned. A single bad row fails the whole load.
    pub fn load(&self) -> Result<Vec<Item>, StorageError> {
        if !self.path.exists() {
            info!("No todo file at {}, creating one", self.path.display());
            self.save(&[])?;
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            // Zero-byte file: nothing to read, the next save writes a header.
            return Ok(Vec::new());
        }
        if headers.iter().ne(HEADER.iter().copied()) {
            return Err(StorageError::Header(
                headers.iter().collect::<Vec<_>>().join(","),
            ));
        }

        let mut items = Vec::new();
        for row in reader.deserialize::<StoredRow>() {
            items.push(row?.into_item());
        }

        info!("Loaded {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    /// Overwrite the file with a header plus one row per item.
    pub fn save(&self, items: &[Item]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.tmp_path();
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp_path)?;
        writer.write_record(HEADER)?;
        for item in items {
            writer.serialize(StoredRowRef::from(item))?;
        }
        writer.flush()?;
        drop(writer);

        fs::rename(&tmp_path, &self.path)?;
        debug!("Saved {} items to {}", items.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
