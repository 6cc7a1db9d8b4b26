// ============================================================
// Layer 3 - Pipeline Errors
// ============================================================
// Typed failures surfaced by the loader and the renderer.
// The application layer wraps these in anyhow::Error with
// extra context; tests match on the variants directly.
//
// A column failing numeric classification is NOT an error;
// it simply drops out of the statistics.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The input path does not resolve to a readable file
    #[error("input file '{}' not found (current directory: {})", .path.display(), .cwd.display())]
    InputNotFound { path: PathBuf, cwd: PathBuf },

    /// A data row has a different number of cells than the header
    #[error("row {row} has {found} cells but the header has {expected}")]
    RecordMismatch { row: usize, expected: usize, found: usize },

    /// Any other CSV decoding failure (bad UTF-8, I/O mid-read)
    #[error("failed to parse CSV input: {0}")]
    Csv(#[from] csv::Error),

    /// The report file could not be created or written
    #[error("failed to write report to '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PDF object graph could not be serialised
    #[error("failed to build PDF: {0}")]
    Pdf(String),
}
