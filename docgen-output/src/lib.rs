//! # docgen-output
//!
//! Document writer and the generation pipeline.
//!
//! Call [`pipeline::run`] to turn an input file into one document per row,
//! or [`write_document`] to persist a single rendered document.

pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::OutputError;
pub use pipeline::{duplicate_paths, run, RunSummary, Stage};
pub use writer::{output_path, sanitize_file_stem, write_document, WriteResult};
