// ============================================================
// Layer 5 - Report Renderer
// ============================================================
// Lays the Analysis and a sample of raw rows out as a document:
//
//   Page 1   Report Summary
//              Total records analyzed: N
//              Data fields: a, b, c
//            Numeric Field Statistics   (only if any numeric field)
//              Field: x
//                Minimum / Maximum / Average / Sum  (2 decimals)
//
//   Page 2   Sample Data (First 10 Rows)
//              bordered table, first 4 fields × first 10 records
//
// Every page carries the ReportTemplate header and footer.
// compose() only builds the layout; render() also writes the PDF
// and checks the file landed on disk.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::domain::analysis::Analysis;
use crate::domain::error::ReportError;
use crate::domain::record::Dataset;
use crate::report::builder::DocumentBuilder;
use crate::report::layout::{Align, FontStyle, RenderedDocument};
use crate::report::pdf::PdfWriter;
use crate::report::template::ReportTemplate;

pub const REPORT_TITLE: &str = "Data Analysis Report";
pub const SUMMARY_HEADING: &str = "Report Summary";
pub const STATS_HEADING: &str = "Numeric Field Statistics";
pub const SAMPLE_HEADING: &str = "Sample Data (First 10 Rows)";

/// Rows and columns shown in the sample table
pub const SAMPLE_ROWS: usize = 10;
pub const SAMPLE_COLUMN_WIDTHS: [f64; 4] = [40.0, 30.0, 30.0, 30.0];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct ReportRenderer {
    template: ReportTemplate,
}

impl ReportRenderer {
    /// Renderer stamped with the current local time
    pub fn new() -> Self {
        Self::with_timestamp(Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    /// Renderer with a fixed "Generated on" text
    pub fn with_timestamp(generated_at: impl Into<String>) -> Self {
        Self {
            template: ReportTemplate::new(REPORT_TITLE, generated_at),
        }
    }

    /// Lay out the full report without writing anything.
    pub fn compose(&self, dataset: &Dataset, analysis: &Analysis) -> RenderedDocument {
        let mut doc = DocumentBuilder::new(self.template.clone());
        doc.add_page();

        write_summary(&mut doc, analysis);
        if analysis.has_numeric_columns() {
            write_statistics(&mut doc, analysis);
        }

        doc.add_page();
        write_sample_table(&mut doc, dataset, analysis);

        doc.finish()
    }

    /// Compose the report, write it to `output_path` (resolved to an
    /// absolute path), and report whether the file now exists.
    ///
    /// Write failures are errors; the existence check is advisory and
    /// only affects the returned flag.
    pub fn render(&self, dataset: &Dataset, analysis: &Analysis, output_path: &Path) -> Result<bool, ReportError> {
        let rendered = self.compose(dataset, analysis);
        let path     = absolute_path(output_path)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ReportError::OutputWrite {
                path: path.clone(),
                source,
            })?;
        }

        PdfWriter::write(&rendered, &path)?;

        if path.exists() {
            tracing::info!("Report saved to: {}", path.display());
            Ok(true)
        } else {
            tracing::error!("Failed to create PDF file at '{}'", path.display());
            Ok(false)
        }
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `path` against the current directory
pub fn absolute_path(path: &Path) -> Result<PathBuf, ReportError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|source| ReportError::OutputWrite { path: path.to_path_buf(), source })
}

fn write_summary(doc: &mut DocumentBuilder<ReportTemplate>, analysis: &Analysis) {
    doc.set_font(FontStyle::Bold, 12.0).write_line(10.0, SUMMARY_HEADING);

    doc.set_font(FontStyle::Regular, 10.0)
        .write_line(6.0, &format!("Total records analyzed: {}", analysis.record_count))
        .write_line(6.0, &format!("Data fields: {}", analysis.column_names.join(", ")))
        .ln(5.0);
}

fn write_statistics(doc: &mut DocumentBuilder<ReportTemplate>, analysis: &Analysis) {
    doc.set_font(FontStyle::Bold, 12.0).write_line(10.0, STATS_HEADING);
    doc.set_font(FontStyle::Regular, 10.0);

    for (field, stats) in analysis.numeric_stats() {
        doc.write_line(6.0, &format!("Field: {field}"))
            .write_line(6.0, &format!("  Minimum: {:.2}", stats.minimum))
            .write_line(6.0, &format!("  Maximum: {:.2}", stats.maximum))
            .write_line(6.0, &format!("  Average: {:.2}", stats.average))
            .write_line(6.0, &format!("  Sum: {:.2}", stats.sum))
            .ln(2.0);
    }
}

fn write_sample_table(doc: &mut DocumentBuilder<ReportTemplate>, dataset: &Dataset, analysis: &Analysis) {
    doc.set_font(FontStyle::Bold, 12.0).write_line(10.0, SAMPLE_HEADING);

    let column_count = analysis.column_names.len().min(SAMPLE_COLUMN_WIDTHS.len());
    let headers      = &analysis.column_names[..column_count];
    let widths       = &SAMPLE_COLUMN_WIDTHS[..column_count];

    if headers.is_empty() {
        return;
    }

    doc.set_font(FontStyle::Bold, 10.0).table_row(widths, headers, 7.0, Align::Center);

    doc.set_font(FontStyle::Regular, 8.0);
    for record in dataset.records().iter().take(SAMPLE_ROWS) {
        let cells: Vec<&str> = headers
            .iter()
            .map(|h| record.get(h).unwrap_or(""))
            .collect();
        doc.table_row(widths, &cells, 6.0, Align::Center);
    }
}
