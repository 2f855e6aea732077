//! Notes-file collaborator boundary.
//!
//! File I/O is the only place a reportable failure can originate. An
//! unavailable source is surfaced unchanged next to an empty series, so
//! downstream consumers proceed with no-data semantics while "no data
//! collected" stays distinguishable from "collected but nothing found".

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::CycleSeries;
use crate::notes;
use crate::vocab::Vocabulary;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("source file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read source file {}: {}", .path.display(), .reason)]
    Unreadable { path: PathBuf, reason: String },
}

/// Read the raw line list from a source file.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
        _ => SourceError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Result of importing a notes file.
#[derive(Debug)]
pub struct NotesImport {
    pub series: CycleSeries,
    /// The source condition, when the file could not be read.
    pub source_error: Option<SourceError>,
}

/// Read and parse a notes file into a `CycleSeries`.
pub fn import_notes(path: &Path, vocab: &Vocabulary) -> NotesImport {
    match read_lines(path) {
        Ok(lines) => {
            let series = notes::parse_lines(&lines, vocab);
            tracing::info!(
                file = %path.display(),
                records = series.len(),
                "Imported cycle notes"
            );
            NotesImport {
                series,
                source_error: None,
            }
        }
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "Notes source unavailable");
            NotesImport {
                series: CycleSeries::default(),
                source_error: Some(e),
            }
        }
    }
}
