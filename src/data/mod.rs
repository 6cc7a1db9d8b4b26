// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything between the CSV file on disk and the Analysis the
// renderer consumes:
//
//   input.csv
//       │
//       ▼
//   CsvLoader   → reads the header and rows into a Dataset
//       │
//       ▼
//   Analyzer    → classifies columns, computes ColumnStats
//       │
//       ▼
//   Analysis    (handed to the report layer)
//
// Each step consumes the previous step's output wholesale.

/// Reads CSV files into a Dataset using the csv crate
pub mod loader;

/// Computes per-column numeric statistics
pub mod analyzer;
