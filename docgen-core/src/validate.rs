//! Row validation.
//!
//! Columns are checked in file order and the first violation wins:
//! name, date, counterparty, invoice, bank slip. Dates use the fixed
//! `d/m/yyyy` layout (one or two digit day and month, four digit year).

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::{Field, RawRow, Record};

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Validate one raw row found at data-row position `line` (1-indexed).
pub fn validate(raw: &RawRow, line: usize) -> Result<Record, ValidationError> {
    let name = required(raw, Field::Name, line)?;
    let date = parse_date(raw.cell(Field::Date)).ok_or_else(|| ValidationError::InvalidDate {
        line,
        value: raw.cell(Field::Date).to_owned(),
    })?;
    let counterparty_name = required(raw, Field::Counterparty, line)?;
    let invoice_ref = required(raw, Field::Invoice, line)?;
    let bank_slip_ref = required(raw, Field::BankSlip, line)?;

    Ok(Record {
        name,
        date,
        counterparty_name,
        invoice_ref,
        bank_slip_ref,
    })
}

/// Validate every row of a file before anything is rendered.
///
/// Returns all records in row order, or the first error. Line numbers are
/// the rows' positions in `rows`, so blank rows ([`RawRow::is_blank`]) are
/// skipped here rather than by the readers.
pub fn validate_rows(rows: &[RawRow]) -> Result<Vec<Record>, ValidationError> {
    rows.iter()
        .enumerate()
        .filter(|(_, raw)| !raw.is_blank())
        .map(|(idx, raw)| validate(raw, idx + 1))
        .collect()
}

fn required(raw: &RawRow, field: Field, line: usize) -> Result<String, ValidationError> {
    let value = raw.cell(field);
    if value.trim().is_empty() {
        return Err(ValidationError::Missing { field, line });
    }
    Ok(value.to_owned())
}

/// Parse `d/m/yyyy`. chrono alone would accept short years and padded
/// input, so the shape is checked first.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };
    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(*day, 1, 2) || !digits(*month, 1, 2) || !digits(*year, 4, 4) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
