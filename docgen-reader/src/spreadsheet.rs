//! `.xlsx` input. Only the sheet named [`SHEET_NAME`] is read.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Reader, Xlsx, XlsxError};
use chrono::{NaiveDate, TimeDelta};
use docgen_core::RawRow;

use crate::error::{format_err, io_err, ReadError};

/// The worksheet every input workbook must contain.
pub const SHEET_NAME: &str = "Sheet1";

/// Read every data row of `SHEET_NAME`, dropping the first (header) row.
pub fn read_xlsx(path: &Path) -> Result<Vec<RawRow>, ReadError> {
    let file = File::open(path).map_err(|e| io_err(path, e))?;
    let mut workbook: Xlsx<_> = Xlsx::new(BufReader::new(file)).map_err(|e| xlsx_err(path, e))?;

    if !workbook.sheet_names().iter().any(|name| name == SHEET_NAME) {
        return Err(ReadError::MissingSheet {
            path: path.to_path_buf(),
            sheet: SHEET_NAME.to_string(),
        });
    }
    let range = workbook
        .worksheet_range(SHEET_NAME)
        .map_err(|e| xlsx_err(path, e))?;

    // calamine trims leading empty columns; pad them back so cells stay positional.
    let leading = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    let rows = range
        .rows()
        .skip(1)
        .map(|cells| {
            let mut out = vec![String::new(); leading];
            out.extend(cells.iter().map(cell_text));
            RawRow(out)
        })
        .collect();
    Ok(rows)
}

fn xlsx_err(path: &Path, err: XlsxError) -> ReadError {
    match err {
        XlsxError::Io(source) => io_err(path, source),
        other => format_err(path, other),
    }
}

/// Text form of one cell as the validator expects it.
pub(crate) fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => serial_to_date(dt.as_f64(), dt.is_1904())
            .map(format_date)
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTimeIso(s) => s
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(format_date)
            .unwrap_or_else(|| s.clone()),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Day serial to calendar date. The 1900 system counts from 1899-12-30, the
/// 1904 system (older Mac workbooks) from 1904-01-01. Serials outside
/// chrono's range yield `None`.
fn serial_to_date(serial: f64, is_1904: bool) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let base = if is_1904 {
        NaiveDate::from_ymd_opt(1904, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    };
    base.checked_add_signed(TimeDelta::try_days(serial.floor() as i64)?)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}
