// ============================================================
// Layer 4 - Analyzer
// ============================================================
// Turns a Dataset into an Analysis. Pure function, no I/O.
//
// For each column (in dataset order):
//   1. Classify every cell once → CellValue::{Numeric, NotNumeric}
//   2. If ANY cell is NotNumeric the whole column is dropped
//      from the numeric analysis
//   3. Otherwise compute min / max / sum / average from the
//      cached values
//
// Parsing once per cell means the eligibility check and the
// statistics pass always see the same numbers.

use crate::domain::analysis::{Analysis, CellValue, ColumnStats};
use crate::domain::record::Dataset;

pub struct Analyzer;

impl Analyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyse `dataset`. Zero records yields `Analysis::empty()`.
    pub fn analyze(&self, dataset: &Dataset) -> Analysis {
        if dataset.is_empty() {
            tracing::debug!("Dataset has no records - returning empty analysis");
            return Analysis::empty();
        }

        let mut analysis = Analysis {
            record_count: dataset.len(),
            column_names: dataset.columns().to_vec(),
            ..Analysis::default()
        };

        for column in dataset.columns() {
            match numeric_values(dataset, column) {
                Some(values) => {
                    // values is non-empty because the dataset is non-empty
                    if let Some(stats) = ColumnStats::from_values(&values) {
                        analysis.numeric_column_names.push(column.clone());
                        analysis.stats.insert(column.clone(), stats);
                    }
                }
                None => {
                    tracing::debug!("Column '{}' is not numeric", column);
                }
            }
        }

        tracing::debug!(
            "Analysed {} records: {} of {} columns numeric",
            analysis.record_count,
            analysis.numeric_column_names.len(),
            analysis.column_names.len()
        );

        analysis
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Every value of `column` as f64, or None if any cell is missing
/// or fails to parse.
fn numeric_values(dataset: &Dataset, column: &str) -> Option<Vec<f64>> {
    dataset
        .column_cells(column)
        .map(|cell| cell.map(CellValue::classify).and_then(|v| v.as_f64()))
        .collect()
}
