//! Error types for docgen-reader.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading raw rows from a source file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file extension does not map to a known format. Raised before the
    /// file is opened.
    #[error("unsupported file extension '{extension}'; expected: csv, xlsx")]
    UnsupportedFormat { extension: String },

    /// The source file could not be opened or read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file opened but its contents could not be decoded.
    #[error("malformed input file {path}: {message}")]
    Format { path: PathBuf, message: String },

    /// The workbook has no sheet with the expected name.
    #[error("sheet '{sheet}' not found in {path}")]
    MissingSheet { path: PathBuf, sheet: String },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ReadError {
    ReadError::Io {
        path: path.into(),
        source,
    }
}

pub(crate) fn format_err(path: impl Into<PathBuf>, message: impl ToString) -> ReadError {
    ReadError::Format {
        path: path.into(),
        message: message.to_string(),
    }
}
