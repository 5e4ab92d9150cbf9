//! Generation pipeline: read → validate → render → write.
//!
//! The run is two-phase. Every row of the input is validated before any
//! document is rendered, and every document is rendered before any file is
//! written, so a bad row or a template failure leaves the output directory
//! untouched.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use docgen_core::{validate_rows, Record};
use docgen_reader::SourceFormat;
use docgen_renderer::DocumentRenderer;

use crate::error::OutputError;
use crate::writer::{output_path, write_document, WriteResult};

/// Progress of a run. Any stage can move to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    ReaderSelected,
    RowsLoaded,
    AllRowsValidated,
    Rendering,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Idle => "idle",
            Stage::ReaderSelected => "reader selected",
            Stage::RowsLoaded => "rows loaded",
            Stage::AllRowsValidated => "all rows validated",
            Stage::Rendering => "rendering",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(s)
    }
}

fn enter(stage: Stage) {
    tracing::debug!("pipeline: {stage}");
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RunSummary {
    /// Number of validated records.
    pub rows: usize,
    /// One entry per record, in row order.
    pub writes: Vec<WriteResult>,
}

/// Generate one document per row of `input` into `output_dir`.
pub fn run(input: &Path, output_dir: &Path) -> Result<RunSummary, OutputError> {
    let result = run_stages(input, output_dir);
    if let Err(err) = &result {
        enter(Stage::Failed);
        tracing::debug!("pipeline stopped: {err}");
    }
    result
}

fn run_stages(input: &Path, output_dir: &Path) -> Result<RunSummary, OutputError> {
    enter(Stage::Idle);
    let format = SourceFormat::from_path(input)?;

    enter(Stage::ReaderSelected);
    let raw_rows = format.read(input)?;

    enter(Stage::RowsLoaded);
    let records = validate_rows(&raw_rows)?;

    enter(Stage::AllRowsValidated);
    let renderer = DocumentRenderer::new().map_err(|source| OutputError::Render {
        name: docgen_renderer::DOCUMENT_TEMPLATE.to_string(),
        source,
    })?;
    let writes = commit(&renderer, &records, output_dir)?;

    enter(Stage::Done);
    Ok(RunSummary {
        rows: records.len(),
        writes,
    })
}

/// Render every record, then write every document, both in row order.
pub fn commit(
    renderer: &DocumentRenderer,
    records: &[Record],
    output_dir: &Path,
) -> Result<Vec<WriteResult>, OutputError> {
    enter(Stage::Rendering);
    let documents = records
        .iter()
        .map(|record| {
            renderer
                .render(record)
                .map_err(|source| OutputError::Render {
                    name: record.name.clone(),
                    source,
                })
        })
        .collect::<Result<Vec<String>, OutputError>>()?;

    for path in duplicate_paths(records, output_dir) {
        tracing::warn!(
            "several records share the output file {}; only the last one is kept",
            path.display()
        );
    }

    let mut writes = Vec::with_capacity(records.len());
    for (record, content) in records.iter().zip(&documents) {
        writes.push(write_document(output_dir, record, content)?);
    }
    Ok(writes)
}

/// Output paths claimed by more than one record, each listed once, in the
/// order the collisions occur.
/// Records that map to the same file overwrite each other; the last one wins.
pub fn duplicate_paths(records: &[Record], output_dir: &Path) -> Vec<PathBuf> {
    let mut seen: HashMap<PathBuf, usize> = HashMap::new();
    let mut order = Vec::new();
    for record in records {
        let path = output_path(output_dir, record);
        let count = seen.entry(path.clone()).or_default();
        *count += 1;
        if *count == 2 {
            order.push(path);
        }
    }
    order
}
