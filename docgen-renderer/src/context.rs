//! Template bindings built from a validated [`Record`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use docgen_core::Record;

use crate::error::RenderError;

/// The five names a document template can refer to.
///
/// `date` stays a date value (serialized as `YYYY-MM-DD`) so templates choose
/// the display format through Tera's `date` filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentContext {
    pub name: String,
    pub date: NaiveDate,
    pub doctor: String,
    pub invoice: String,
    #[serde(rename = "bankSlip")]
    pub bank_slip: String,
}

impl DocumentContext {
    /// Bind the fields of `record`.
    pub fn from_record(record: &Record) -> Self {
        DocumentContext {
            name: record.name.clone(),
            date: record.date,
            doctor: record.counterparty_name.clone(),
            invoice: record.invoice_ref.clone(),
            bank_slip: record.bank_slip_ref.clone(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(|e| RenderError::Binding(e.to_string()))
    }
}
