//! Error types for docgen-output.

use std::path::PathBuf;

use thiserror::Error;

use docgen_core::ValidationError;
use docgen_reader::ReadError;
use docgen_renderer::RenderError;

/// All errors that can arise from a generation run.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The input file could not be selected or loaded.
    #[error(transparent)]
    Read(#[from] ReadError),

    /// A row broke the schema; nothing was rendered or written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The template failed for one record; nothing was written.
    #[error("failed to render document for '{name}': {source}")]
    Render {
        name: String,
        #[source]
        source: RenderError,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`OutputError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> OutputError {
    OutputError::Io {
        path: path.into(),
        source,
    }
}
