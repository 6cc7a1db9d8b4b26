// ============================================================
// Layer 3 - Analysis Domain Types
// ============================================================
// CellValue  - one cell classified as a number or not
// ColumnStats - min / max / sum / average of a numeric column
// Analysis   - everything the renderer needs to know about a dataset
//
// A column is either fully numeric or left out of the numeric
// analysis entirely; there is no partial inclusion.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Digit-grouping separator removed before parsing, e.g. "3,250.00".
pub const GROUPING_SEPARATOR: char = ',';

/// Result of classifying a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    Numeric(f64),
    NotNumeric,
}

impl CellValue {
    /// Strip grouping separators and parse the rest as an `f64`.
    ///
    /// Surrounding whitespace is ignored. Empty text and non-finite
    /// values (`NaN`, `inf`) are not numeric.
    pub fn classify(raw: &str) -> Self {
        let cleaned: String = raw.chars().filter(|c| *c != GROUPING_SEPARATOR).collect();
        match cleaned.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => CellValue::Numeric(v),
            _ => CellValue::NotNumeric,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Numeric(v) => Some(*v),
            CellValue::NotNumeric => None,
        }
    }
}

/// Summary statistics for one numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub minimum: f64,
    pub maximum: f64,
    pub sum: f64,
    pub average: f64,
}

impl ColumnStats {
    /// Compute stats over `values`. Returns None for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let minimum = values.iter().copied().fold(f64::INFINITY, f64::min);
        let maximum = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let sum: f64 = values.iter().sum();
        let average = if sum.is_finite() {
            sum / values.len() as f64
        } else {
            running_mean(values)
        }
        .clamp(minimum, maximum);

        Some(Self { minimum, maximum, sum, average })
    }
}

/// Mean that never forms the full sum, so it stays finite when the
/// sum overflows. Each step moves toward `x` by a finite fraction.
fn running_mean(values: &[f64]) -> f64 {
    values.iter().enumerate().fold(0.0, |mean, (i, x)| {
        let k = (i + 1) as f64;
        mean + x / k - mean / k
    })
}

/// The summary derived from a Dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Number of data rows (header excluded)
    pub record_count: usize,

    /// Every column name in dataset order
    pub column_names: Vec<String>,

    /// Subset of `column_names` whose every cell is numeric,
    /// in dataset order
    pub numeric_column_names: Vec<String>,

    /// Statistics per numeric column
    pub stats: BTreeMap<String, ColumnStats>,
}

impl Analysis {
    /// The analysis of a dataset with no records
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_numeric_columns(&self) -> bool {
        !self.numeric_column_names.is_empty()
    }

    /// Numeric columns paired with their statistics, in dataset order.
    pub fn numeric_stats(&self) -> impl Iterator<Item = (&str, &ColumnStats)> {
        self.numeric_column_names
            .iter()
            .filter_map(|name| self.stats.get(name).map(|s| (name.as_str(), s)))
    }
}
