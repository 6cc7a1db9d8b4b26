// ============================================================
// Layer 3 - Record and Dataset
// ============================================================
// A Record is one data row of the input file, stored as a
// mapping from column name to the cell text exactly as read.
// No trimming and no type inference happen at load time;
// classification is the analyzer's job.
//
// A Dataset owns every Record plus the ordered column names
// taken from the header row. Duplicate header names collapse
// into one column (first position, last value wins), the same
// way inserting into a map would behave.

use std::collections::HashMap;

/// One row of input data keyed by column name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    cells: HashMap<String, String>,
}

impl Record {
    /// Build a record by zipping header names with row values.
    ///
    /// When a name repeats, the later value overwrites the earlier one.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let cells = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { cells }
    }

    /// Raw text under `column`, or None if the record has no such key.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

}

/// All records of one input file sharing a single column schema.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Column names in header order, duplicates removed
    columns: Vec<String>,

    /// Data rows in file order
    records: Vec<Record>,
}

impl Dataset {
    /// Create a dataset from a header row and its records.
    /// Repeated header names keep only their first position.
    pub fn new(header: &[String], records: Vec<Record>) -> Self {
        let mut columns: Vec<String> = Vec::with_capacity(header.len());
        for name in header {
            if !columns.contains(name) {
                columns.push(name.clone());
            }
        }
        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the raw cells of one column in record order.
    /// Records without the key yield None.
    pub fn column_cells<'a>(&'a self, column: &'a str) -> impl Iterator<Item = Option<&'a str>> + 'a {
        self.records.iter().map(move |r| r.get(column))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_header_last_value_wins() {
        let record = Record::from_pairs([("a", "1"), ("b", "2"), ("a", "3")]);
        assert_eq!(record.get("a"), Some("3"));
        assert_eq!(record.get("b"), Some("2"));
    }

    #[test]
    fn test_dataset_dedups_columns_in_first_position() {
        let header = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let ds = Dataset::new(&header, Vec::new());
        assert_eq!(ds.columns(), &["a".to_string(), "b".to_string()]);
        assert!(ds.is_empty());
    }

    #[test]
    fn test_values_kept_verbatim() {
        let record = Record::from_pairs([("name", "  Alice ")]);
        assert_eq!(record.get("name"), Some("  Alice "));
        assert_eq!(record.get("missing"), None);
    }
}
