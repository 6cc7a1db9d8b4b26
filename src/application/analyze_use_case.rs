// ============================================================
// Layer 2 - AnalyzeUseCase
// ============================================================
// Load + analyse only, no PDF. Used by the `analyze` command to
// show the numbers a report would be built from.

use anyhow::{Context, Result};

use crate::data::{analyzer::Analyzer, loader::CsvLoader};
use crate::domain::analysis::Analysis;
use crate::domain::traits::RecordSource;

pub struct AnalyzeUseCase {
    input_path: String,
}

impl AnalyzeUseCase {
    pub fn new(input_path: impl Into<String>) -> Self {
        Self { input_path: input_path.into() }
    }

    pub fn execute(&self) -> Result<Analysis> {
        tracing::info!("Reading data from '{}'", self.input_path);
        let dataset = CsvLoader::new(&self.input_path)
            .load()
            .with_context(|| format!("Cannot load input '{}'", self.input_path))?;

        let analysis = Analyzer::new().analyze(&dataset);
        tracing::info!(
            "Analysed {} records, {} numeric field(s)",
            analysis.record_count,
            analysis.numeric_column_names.len()
        );
        Ok(analysis)
    }
}
