//! Output writer: one `.html` file per record.
//!
//! ## `write_document`
//!
//! 1. Derive a safe file stem from the record name.
//! 2. Ensure the output directory exists.
//! 3. Normalise line endings to LF.
//! 4. Write to `<path>.docgen.tmp`.
//! 5. Rename over the final path (atomic on POSIX).
//!
//! An existing document with the same name is replaced.

use std::path::{Path, PathBuf};

use docgen_core::Record;

use crate::error::{io_err, OutputError};

/// Extension of every generated document.
pub const DOCUMENT_EXTENSION: &str = "html";

const TMP_SUFFIX: &str = "docgen.tmp";

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual document write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// No file existed at `path`; it was created.
    Written { path: PathBuf },
    /// A file already existed at `path` and was overwritten.
    Replaced { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path } | WriteResult::Replaced { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// File naming
// ---------------------------------------------------------------------------

/// Make `name` usable as a single path component.
///
/// Separators, characters Windows reserves and control characters become
/// `_`; surrounding whitespace and trailing dots are dropped. `.`, `..` and
/// names with nothing left map to `_`.
pub fn sanitize_file_stem(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '<' | '>' | ':' | '"' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let trimmed = replaced.trim().trim_end_matches('.').trim_end();
    if trimmed.is_empty() {
        "_".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Destination of the document for `record` inside `output_dir`.
pub fn output_path(output_dir: &Path, record: &Record) -> PathBuf {
    output_dir.join(format!(
        "{}.{DOCUMENT_EXTENSION}",
        sanitize_file_stem(&record.name)
    ))
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Write the rendered `content` for `record` into `output_dir`.
pub fn write_document(
    output_dir: &Path,
    record: &Record,
    content: &str,
) -> Result<WriteResult, OutputError> {
    std::fs::create_dir_all(output_dir).map_err(|e| io_err(output_dir, e))?;
    atomic_write(&output_path(output_dir, record), content)
}

pub(crate) fn atomic_write(path: &Path, content: &str) -> Result<WriteResult, OutputError> {
    let tmp = PathBuf::from(format!("{}.{TMP_SUFFIX}", path.display()));
    atomic_write_with_tmp(path, content, &tmp)
}

fn atomic_write_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<WriteResult, OutputError> {
    let normalized = content.replace("\r\n", "\n");
    let existed = path.exists();

    std::fs::write(tmp, &normalized).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    let path = path.to_path_buf();
    if existed {
        tracing::info!("replaced: {}", path.display());
        Ok(WriteResult::Replaced { path })
    } else {
        tracing::info!("wrote: {}", path.display());
        Ok(WriteResult::Written { path })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
