//! # docgen-renderer
//!
//! Tera-based renderer that turns validated records into documents.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use docgen_core::Record;
//! use docgen_renderer::DocumentRenderer;
//!
//! fn render_all(records: &[Record]) {
//!     if let Ok(renderer) = DocumentRenderer::new() {
//!         for record in records {
//!             if let Ok(html) = renderer.render(record) {
//!                 println!("{}: {} bytes", record.name, html.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::DocumentContext;
pub use engine::{DocumentRenderer, DOCUMENT_TEMPLATE, HTML_ATTR_FILTER};
pub use error::RenderError;
