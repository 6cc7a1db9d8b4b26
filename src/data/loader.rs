// ============================================================
// Layer 4 - CSV Loader
// ============================================================
// Reads a comma-delimited file into a Dataset using the csv crate.
//
// File layout expected:
//   name,score,city        ← header row, becomes the column names
//   Alice,95,NYC           ← one Record per following line
//   Bob,abc,LA
//
// Cell text is stored verbatim: no trimming, no type coercion.
//
// Rows whose cell count differs from the header are rejected
// (the reader is not flexible), so every Record carries exactly
// the Dataset's column names.
//
// The file handle lives inside `load()` and is closed when the
// reader drops, on success and on every error path.

use std::{
    env,
    fs::File,
    path::PathBuf,
};

use csv::{ErrorKind, ReaderBuilder};

use crate::domain::error::ReportError;
use crate::domain::record::{Dataset, Record};
use crate::domain::traits::RecordSource;

/// Loads a Dataset from a CSV file on disk.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the input, mapping any failure to InputNotFound.
    fn open(&self) -> Result<File, ReportError> {
        let not_found = || {
            let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            tracing::error!(
                "File '{}' not found! Current directory: {}",
                self.path.display(),
                cwd.display()
            );
            ReportError::InputNotFound { path: self.path.clone(), cwd }
        };

        // Directories open fine on some platforms but can't be read as text
        if !self.path.is_file() {
            return Err(not_found());
        }

        File::open(&self.path).map_err(|e| {
            tracing::debug!("open('{}') failed: {}", self.path.display(), e);
            not_found()
        })
    }
}

impl RecordSource for CsvLoader {
    fn load(&self) -> Result<Dataset, ReportError> {
        let file = self.open()?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(file);

        let header: Vec<String> = reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect();

        let mut records = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            let row = result.map_err(|e| mismatch_or_csv(e, idx + 1))?;
            records.push(Record::from_pairs(
                header.iter().map(String::as_str).zip(row.iter()),
            ));
        }

        tracing::debug!(
            "Loaded {} records with {} header cells from '{}'",
            records.len(),
            header.len(),
            self.path.display()
        );

        Ok(Dataset::new(&header, records))
    }
}

/// Translate the reader's unequal-length error into RecordMismatch.
/// `row` is the 1-based data row (header excluded).
fn mismatch_or_csv(err: csv::Error, row: usize) -> ReportError {
    match err.kind() {
        ErrorKind::UnequalLengths { expected_len, len, .. } => ReportError::RecordMismatch {
            row,
            expected: *expected_len as usize,
            found:    *len as usize,
        },
        _ => ReportError::Csv(err),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        csv_bytes(contents.as_bytes())
    }

    fn csv_bytes(contents: &[u8]) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents).unwrap();
        f
    }

    #[test]
    fn test_loads_header_and_rows() {
        let f  = csv_file("name,score,city\nAlice,95,NYC\nBob,abc,LA\n");
        let ds = CsvLoader::new(f.path()).load().unwrap();

        assert_eq!(ds.columns(), &["name", "score", "city"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[1].get("score"), Some("abc"));
    }

    #[test]
    fn test_quoted_grouped_number_kept_verbatim() {
        let f  = csv_file("qty,price\n10,5.50\n20,\"3,250.00\"\n");
        let ds = CsvLoader::new(f.path()).load().unwrap();
        assert_eq!(ds.records()[1].get("price"), Some("3,250.00"));
    }

    #[test]
    fn test_missing_file_is_input_not_found() {
        let err = CsvLoader::new("definitely/not/here.csv").load().unwrap_err();
        match &err {
            ReportError::InputNotFound { path, .. } => {
                assert_eq!(path, Path::new("definitely/not/here.csv"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("definitely/not/here.csv"));
    }

    #[test]
    fn test_directory_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvLoader::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, ReportError::InputNotFound { .. }));
    }

    #[test]
    fn test_short_row_is_rejected() {
        let f   = csv_file("a,b,c\n1,2,3\n4,5\n");
        let err = CsvLoader::new(f.path()).load().unwrap_err();
        match err {
            ReportError::RecordMismatch { row, expected, found } => {
                assert_eq!(row, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_gives_empty_dataset() {
        let f  = csv_file("");
        let ds = CsvLoader::new(f.path()).load().unwrap();
        assert!(ds.is_empty());
        assert!(ds.columns().is_empty());
    }

    #[test]
    fn test_header_only() {
        let f  = csv_file("a,b\n");
        let ds = CsvLoader::new(f.path()).load().unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.columns().len(), 2);
    }

    #[test]
    fn test_invalid_utf8_is_csv_error() {
        let f   = csv_bytes(b"a,b\n1,\xff\n");
        let err = CsvLoader::new(f.path()).load().unwrap_err();
        assert!(matches!(err, ReportError::Csv(_)), "unexpected error: {err:?}");
    }
}
