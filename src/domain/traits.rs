// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The application layer talks to these traits rather than to
// concrete loaders or hooks, so a different input format or a
// different post-render action can be swapped in without
// touching the use cases.

use std::path::Path;

use anyhow::Result;

use crate::domain::error::ReportError;
use crate::domain::record::Dataset;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce a Dataset.
///
/// Implementations:
///   - CsvLoader → reads a comma-delimited file with a header row
pub trait RecordSource {
    /// Load every record from this source.
    fn load(&self) -> Result<Dataset, ReportError>;
}

// ─── ReportHook ───────────────────────────────────────────────────────────────
/// Optional side effect run after a report has been written.
///
/// Implementations:
///   - SystemViewer → opens the file in the desktop's default viewer
///   - NoopHook     → does nothing
pub trait ReportHook {
    fn after_render(&self, report_path: &Path) -> Result<()>;
}

/// A hook that does nothing; used when auto-open is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHook;

impl ReportHook for NoopHook {
    fn after_render(&self, _report_path: &Path) -> Result<()> {
        Ok(())
    }
}
