//! docgen core library: row types, the fixed five-column schema and the
//! row validator.
//!
//! - [`types`]: [`RawRow`], [`Record`], [`Field`]
//! - [`error`]: [`ValidationError`]
//! - [`validate`]: single-row and whole-file validation

pub mod error;
pub mod types;
pub mod validate;

pub use error::ValidationError;
pub use types::{Field, RawRow, Record};
pub use validate::{validate, validate_rows};
