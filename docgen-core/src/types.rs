//! Row types for the fixed five-column input schema.
//!
//! A [`RawRow`] is whatever a reader decoded from one line of the source file.
//! A [`Record`] only exists once every column has passed validation.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// One of the five input columns, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Date,
    Counterparty,
    Invoice,
    BankSlip,
}

impl Field {
    /// All fields in column order (also the validation order).
    pub fn all() -> &'static [Field] {
        &[
            Field::Name,
            Field::Date,
            Field::Counterparty,
            Field::Invoice,
            Field::BankSlip,
        ]
    }

    /// Zero-based column position in the source file.
    pub fn column(&self) -> usize {
        match self {
            Field::Name => 0,
            Field::Date => 1,
            Field::Counterparty => 2,
            Field::Invoice => 3,
            Field::BankSlip => 4,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Date => write!(f, "date"),
            Field::Counterparty => write!(f, "counterparty name"),
            Field::Invoice => write!(f, "invoice reference"),
            Field::BankSlip => write!(f, "bank-slip reference"),
        }
    }
}

// ---------------------------------------------------------------------------
// RawRow
// ---------------------------------------------------------------------------

/// Unvalidated cells of one data row, header excluded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawRow(pub Vec<String>);

impl RawRow {
    /// Cell text for `field`. Cells past the end of a short row read as `""`.
    pub fn cell(&self, field: Field) -> &str {
        self.0
            .get(field.column())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// `true` when every cell is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|c| c.trim().is_empty())
    }
}

impl From<Vec<String>> for RawRow {
    fn from(cells: Vec<String>) -> Self {
        Self(cells)
    }
}

impl From<&[&str]> for RawRow {
    fn from(cells: &[&str]) -> Self {
        Self(cells.iter().map(|c| (*c).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RawRow {
    fn from(cells: [&str; N]) -> Self {
        Self::from(&cells[..])
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A fully validated row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Subject of the document; also the output file name.
    pub name: String,
    pub date: NaiveDate,
    /// Associated professional (the `doctor` template binding).
    pub counterparty_name: String,
    /// Opaque invoice reference or link.
    pub invoice_ref: String,
    /// Opaque bank-slip reference or link.
    pub bank_slip_ref: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_display() {
        assert_eq!(Field::Name.to_string(), "name");
        assert_eq!(Field::Counterparty.to_string(), "counterparty name");
        assert_eq!(Field::BankSlip.to_string(), "bank-slip reference");
    }

    #[test]
    fn field_columns_follow_file_order() {
        let columns: Vec<usize> = Field::all().iter().map(Field::column).collect();
        assert_eq!(columns, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn short_row_reads_missing_cells_as_empty() {
        let row = RawRow::from(["Maria", "5/3/2024"]);
        assert_eq!(row.cell(Field::Name), "Maria");
        assert_eq!(row.cell(Field::BankSlip), "");
    }

    #[test]
    fn blank_row_detection() {
        assert!(RawRow::from(["", "  ", "\t"]).is_blank());
        assert!(RawRow::default().is_blank());
        assert!(!RawRow::from(["", "x"]).is_blank());
    }
}
