//! End-to-end generation runs over CSV input.

use std::fs;
use std::path::{Path, PathBuf};

use assert_fs::prelude::*;
use docgen_core::{Field, ValidationError};
use docgen_output::{run, OutputError, WriteResult};
use docgen_reader::ReadError;
use predicates::prelude::*;

const HEADER: &str = "Name,Date,Doctor,Invoice,BankSlip\n";

fn input(dir: &assert_fs::TempDir, name: &str, rows: &str) -> PathBuf {
    let file = dir.child(name);
    file.write_str(&format!("{HEADER}{rows}")).expect("write input");
    file.path().to_path_buf()
}

fn files_in(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read output dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// ---------------------------------------------------------------------------
// 1. Happy path
// ---------------------------------------------------------------------------

#[test]
fn single_row_produces_named_document() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let out = tmp.child("email-output");
    let path = input(&tmp, "people.csv", "Maria,5/3/2024,Dr. Souza,inv-1,slip-1\n");

    let summary = run(&path, out.path()).expect("run");
    assert_eq!(summary.rows, 1);
    assert_eq!(summary.writes.len(), 1);

    let doc = out.child("Maria.html");
    doc.assert(predicate::path::exists());
    for expected in ["Maria", "05/03/2024", "Dr. Souza", "inv-1", "slip-1"] {
        doc.assert(predicate::str::contains(expected));
    }
}

#[test]
fn every_row_gets_a_document_in_row_order() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let out = tmp.child("out");
    let path = input(
        &tmp,
        "people.csv",
        "Maria,5/3/2024,Dr. Souza,inv-1,slip-1\n\
         João,6/3/2024,Dra. Lima,inv-2,slip-2\n\
         Ana,7/3/2024,Dr. Reis,inv-3,slip-3\n",
    );

    let summary = run(&path, out.path()).expect("run");
    let written: Vec<String> = summary
        .writes
        .iter()
        .map(|w| w.path().file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(written, vec!["Maria.html", "João.html", "Ana.html"]);
    assert_eq!(files_in(out.path()), vec!["Ana.html", "João.html", "Maria.html"]);
}

#[test]
fn blank_lines_between_rows_are_ignored() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let out = tmp.child("out");
    let path = input(
        &tmp,
        "gaps.csv",
        "Maria,5/3/2024,Dr. Souza,inv-1,slip-1\n,,,,\nAna,7/3/2024,Dr. Reis,inv-3,slip-3\n",
    );
    let summary = run(&path, out.path()).expect("run");
    assert_eq!(summary.rows, 2);
}

// ---------------------------------------------------------------------------
// 2. Duplicate names
// ---------------------------------------------------------------------------

#[test]
fn duplicate_names_keep_the_last_row() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let out = tmp.child("out");
    let path = input(
        &tmp,
        "dupes.csv",
        "Maria,5/3/2024,Dr. Souza,inv-A,slip-A\nMaria,6/3/2024,Dra. Lima,inv-B,slip-B\n",
    );

    let summary = run(&path, out.path()).expect("run");
    assert!(matches!(summary.writes[0], WriteResult::Written { .. }));
    assert!(matches!(summary.writes[1], WriteResult::Replaced { .. }));

    assert_eq!(files_in(out.path()), vec!["Maria.html"]);
    let doc = fs::read_to_string(out.child("Maria.html").path()).unwrap();
    assert!(doc.contains("inv-B"));
    assert!(doc.contains("Dra. Lima"));
    assert!(!doc.contains("inv-A"), "first row must be overwritten");
}

#[test]
fn unsafe_names_are_written_inside_output_dir() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let out = tmp.child("out");
    let path = input(&tmp, "evil.csv", "../escape,5/3/2024,Dr. Souza,inv-1,slip-1\n");

    run(&path, out.path()).expect("run");
    assert_eq!(files_in(out.path()), vec![".._escape.html"]);
    tmp.child("escape.html").assert(predicate::path::missing());
}

// ---------------------------------------------------------------------------
// 3. All-or-nothing validation
// ---------------------------------------------------------------------------

#[test]
fn empty_name_fails_and_writes_nothing() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let out = tmp.child("out");
    let path = input(&tmp, "bad.csv", ",5/3/2024,Dr. Souza,inv-1,slip-1\n");

    let err = run(&path, out.path()).unwrap_err();
    match err {
        OutputError::Validation(v) => {
            assert_eq!(v, ValidationError::Missing { field: Field::Name, line: 1 });
        }
        other => panic!("expected validation error, got: {other}"),
    }
    assert!(files_in(out.path()).is_empty());
}

#[test]
fn late_failure_prevents_output_for_earlier_valid_rows() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let out = tmp.child("out");
    let path = input(
        &tmp,
        "late.csv",
        "Maria,5/3/2024,Dr. Souza,inv-1,slip-1\n\
         João,6/3/2024,Dra. Lima,inv-2,slip-2\n\
         Ana,31/2/2024,Dr. Reis,inv-3,slip-3\n",
    );

    let err = run(&path, out.path()).unwrap_err();
    assert_eq!(err.to_string(), "invalid date at line 3: expected d/m/yyyy, got '31/2/2024'");
    assert!(files_in(out.path()).is_empty());
}

// ---------------------------------------------------------------------------
// 4. Reader failures
// ---------------------------------------------------------------------------

#[test]
fn unknown_extension_fails_before_opening() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let out = tmp.child("out");
    let err = run(&tmp.path().join("foo.txt"), out.path()).unwrap_err();
    assert!(
        matches!(err, OutputError::Read(ReadError::UnsupportedFormat { ref extension }) if extension == "txt"),
        "got: {err}"
    );
    out.assert(predicate::path::missing());
}

#[test]
fn missing_input_is_io_error() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let err = run(&tmp.path().join("absent.csv"), tmp.path()).unwrap_err();
    assert!(matches!(err, OutputError::Read(ReadError::Io { .. })), "got: {err}");
}
