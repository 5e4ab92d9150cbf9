//! Comma-delimited input.

use std::fs::File;
use std::path::Path;

use docgen_core::RawRow;

use crate::error::{format_err, io_err, ReadError};

/// Read every data row of a CSV file. The first record is the header and is
/// dropped; records whose width differs from the header are rejected.
///
/// Completely empty lines are not records and are skipped by the parser, so
/// they do not occupy a row position. A line of empty cells (`,,,,`) does.
pub fn read_csv(path: &Path) -> Result<Vec<RawRow>, ReadError> {
    let file = File::open(path).map_err(|e| io_err(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_err(path, e))?;
        rows.push(RawRow(record.iter().map(str::to_owned).collect()));
    }
    Ok(rows)
}

fn csv_err(path: &Path, err: csv::Error) -> ReadError {
    if let csv::ErrorKind::UnequalLengths {
        pos,
        expected_len,
        len,
    } = err.kind()
    {
        let line = pos.as_ref().map(csv::Position::line).unwrap_or_default();
        return format_err(
            path,
            format!("line {line} has {len} fields, header has {expected_len}"),
        );
    }
    if err.is_io_error() {
        return io_err(path, std::io::Error::from(err));
    }
    format_err(path, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn header_is_dropped() {
        let f = csv_file("Name,Date,Doctor,Invoice,BankSlip\nMaria,5/3/2024,Dr. Souza,inv-1,slip-1\n");
        let rows = read_csv(f.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0[0], "Maria");
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let f = csv_file("a,b,c,d,e\n\"Souza, Maria\",5/3/2024,Dr. X,\"inv,1\",slip\n");
        let rows = read_csv(f.path()).unwrap();
        assert_eq!(rows[0].0[0], "Souza, Maria");
        assert_eq!(rows[0].0[3], "inv,1");
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let f = csv_file("Name,Date,Doctor,Invoice,BankSlip\n");
        assert!(read_csv(f.path()).unwrap().is_empty());
    }

    #[test]
    fn ragged_row_is_a_format_error() {
        let f = csv_file("a,b,c,d,e\nMaria,5/3/2024\n");
        let err = read_csv(f.path()).unwrap_err();
        assert!(matches!(err, ReadError::Format { .. }), "got: {err}");
        assert!(err.to_string().contains("2 fields"), "got: {err}");
    }

    #[test]
    fn empty_lines_take_no_position_but_empty_cells_do() {
        let f = csv_file("a,b,c,d,e\nMaria,5/3/2024,Dr. X,inv,slip\n\n,,,,\nAna,,Dr. Y,inv,slip\n");
        let rows = read_csv(f.path()).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].is_blank());

        let err = docgen_core::validate_rows(&rows).unwrap_err();
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, ReadError::Io { .. }), "got: {err}");
    }
}
