//! Error types for docgen-renderer.

use thiserror::Error;

/// All errors that can arise from template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera failed to parse the template or to render it.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// The record could not be turned into template bindings.
    #[error("template binding error: {0}")]
    Binding(String),
}
