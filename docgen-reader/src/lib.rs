//! Tabular readers for `docgen`.
//!
//! [`SourceFormat::from_path`] picks a decoder from the file extension
//! without touching the file; [`SourceFormat::read`] then loads every data
//! row into memory. The first row of every file is treated as a header and
//! discarded.

pub mod delimited;
pub mod error;
pub mod spreadsheet;

use std::fmt;
use std::path::Path;

use docgen_core::RawRow;

pub use error::ReadError;
pub use spreadsheet::SHEET_NAME;

// ---------------------------------------------------------------------------
// SourceFormat
// ---------------------------------------------------------------------------

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Comma-delimited text (`.csv`).
    Csv,
    /// Excel workbook (`.xlsx`), sheet [`SHEET_NAME`] only.
    Xlsx,
}

impl SourceFormat {
    /// Choose a format from the extension of `path` (case-insensitive).
    ///
    /// Never opens the file.
    pub fn from_path(path: &Path) -> Result<Self, ReadError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "xlsx" => Ok(SourceFormat::Xlsx),
            _ => Err(ReadError::UnsupportedFormat { extension }),
        }
    }

    /// Load every data row of `path` in this format.
    pub fn read(self, path: &Path) -> Result<Vec<RawRow>, ReadError> {
        let rows = match self {
            SourceFormat::Csv => delimited::read_csv(path)?,
            SourceFormat::Xlsx => spreadsheet::read_xlsx(path)?,
        };
        tracing::debug!("read {} data rows from {} ({self})", rows.len(), path.display());
        Ok(rows)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Csv => write!(f, "csv"),
            SourceFormat::Xlsx => write!(f, "xlsx"),
        }
    }
}

/// Detect the format of `path` and load its data rows.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, ReadError> {
    SourceFormat::from_path(path)?.read(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
