// ============================================================
// Layer 6 - Analysis Store
// ============================================================
// Writes an Analysis to disk as pretty-printed JSON so the
// numbers behind a report can be inspected or diffed later.
//
// Example output:
//   {
//     "record_count": 2,
//     "column_names": ["qty", "price"],
//     "numeric_column_names": ["qty", "price"],
//     "stats": {
//       "price": { "minimum": 5.5, "maximum": 3250.0, ... }
//     }
//   }

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::domain::analysis::Analysis;

pub struct AnalysisStore;

impl AnalysisStore {
    /// Serialise `analysis` to a JSON string
    pub fn to_json(analysis: &Analysis) -> Result<String> {
        serde_json::to_string_pretty(analysis).context("Cannot serialise analysis to JSON")
    }

    /// Write `analysis` to `path`, creating parent directories.
    pub fn save(analysis: &Analysis, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let json = Self::to_json(analysis)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write analysis to '{}'", path.display()))?;

        tracing::debug!("Saved analysis JSON to '{}'", path.display());
        Ok(())
    }
}
