// ============================================================
// Layer 2 - ReportUseCase
// ============================================================
// Runs the full pipeline strictly in order:
//
//   Step 1: Load the CSV file        (Layer 4 - data)
//   Step 2: Analyse the dataset      (Layer 4 - data)
//   Step 3: Export analysis JSON     (Layer 6 - infra, optional)
//   Step 4: Render + write the PDF   (Layer 5 - report)
//   Step 5: Post-render hook         (Layer 6 - infra, optional)
//
// A failure in any step aborts the rest, so no report is ever
// written from a partial pipeline.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::data::{analyzer::Analyzer, loader::CsvLoader};
use crate::domain::analysis::Analysis;
use crate::domain::traits::{NoopHook, RecordSource, ReportHook};
use crate::infra::{analysis_store::AnalysisStore, viewer::SystemViewer};
use crate::report::renderer::{absolute_path, ReportRenderer};

// ─── Report Configuration ─────────────────────────────────────────────────────
// Everything one run needs. Serialisable so a run can be described
// in a JSON file as well as on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub input_path:    String,
    pub output_path:   String,
    pub open_report:   bool,
    pub analysis_json: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path:    "data.csv".to_string(),
            output_path:   "sales_report.pdf".to_string(),
            open_report:   false,
            analysis_json: None,
        }
    }
}

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    /// Absolute path the report was written to
    pub report_path: PathBuf,

    /// Whether the file was found on disk after writing
    pub written: bool,

    pub analysis: Analysis,
}

// ─── ReportUseCase ────────────────────────────────────────────────────────────
pub struct ReportUseCase {
    config:   ReportConfig,
    renderer: ReportRenderer,
    hook:     Box<dyn ReportHook>,
}

impl ReportUseCase {
    /// Build the use case; `open_report` selects the viewer hook.
    pub fn new(config: ReportConfig) -> Self {
        let hook: Box<dyn ReportHook> = if config.open_report {
            Box::new(SystemViewer)
        } else {
            Box::new(NoopHook)
        };
        Self::with_hook(config, hook)
    }

    /// Build the use case with an explicit post-render hook
    pub fn with_hook(config: ReportConfig, hook: Box<dyn ReportHook>) -> Self {
        Self { config, renderer: ReportRenderer::new(), hook }
    }

    /// Execute the pipeline end to end
    pub fn execute(&self) -> Result<ReportOutcome> {
        let cfg = &self.config;

        // ── Step 1: Load ─────────────────────────────────────────────────────
        tracing::info!("Reading data...");
        let dataset = CsvLoader::new(&cfg.input_path)
            .load()
            .with_context(|| format!("Cannot load input '{}'", cfg.input_path))?;
        tracing::info!("Loaded {} records", dataset.len());

        // ── Step 2: Analyse ──────────────────────────────────────────────────
        tracing::info!("Analyzing data...");
        let analysis = Analyzer::new().analyze(&dataset);
        tracing::info!(
            "Found {} numeric field(s) out of {}",
            analysis.numeric_column_names.len(),
            analysis.column_names.len()
        );

        // ── Step 3: Optional JSON export ─────────────────────────────────────
        if let Some(json_path) = &cfg.analysis_json {
            AnalysisStore::save(&analysis, Path::new(json_path))?;
            tracing::info!("Analysis written to '{}'", json_path);
        }

        // ── Step 4: Render ───────────────────────────────────────────────────
        tracing::info!("Generating report...");
        let output      = Path::new(&cfg.output_path);
        let report_path = absolute_path(output)?;
        let written     = self
            .renderer
            .render(&dataset, &analysis, &report_path)
            .with_context(|| format!("Cannot generate report '{}'", cfg.output_path))?;

        // ── Step 5: Hook ─────────────────────────────────────────────────────
        // Only on success; a failing hook never fails the run
        if written {
            if let Err(e) = self.hook.after_render(&report_path) {
                tracing::warn!("Post-render hook failed: {:#}", e);
            }
        }

        Ok(ReportOutcome { report_path, written, analysis })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, fs, rc::Rc};

    use crate::domain::error::ReportError;

    /// Records every path it is called with
    struct RecordingHook(Rc<RefCell<Vec<PathBuf>>>);

    impl ReportHook for RecordingHook {
        fn after_render(&self, report_path: &Path) -> Result<()> {
            self.0.borrow_mut().push(report_path.to_path_buf());
            Ok(())
        }
    }

    struct FailingHook;

    impl ReportHook for FailingHook {
        fn after_render(&self, _: &Path) -> Result<()> {
            anyhow::bail!("no viewer")
        }
    }

    fn config_in(dir: &Path, csv: &str) -> ReportConfig {
        let input = dir.join("input.csv");
        fs::write(&input, csv).unwrap();
        ReportConfig {
            input_path:    input.display().to_string(),
            output_path:   dir.join("report.pdf").display().to_string(),
            open_report:   false,
            analysis_json: Some(dir.join("analysis.json").display().to_string()),
        }
    }

    #[test]
    fn test_full_pipeline_writes_report_and_runs_hook() {
        let dir   = tempfile::tempdir().unwrap();
        let cfg   = config_in(dir.path(), "qty,price\n10,5.50\n20,\"3,250.00\"\n");
        let calls = Rc::new(RefCell::new(Vec::new()));

        let outcome = ReportUseCase::with_hook(cfg, Box::new(RecordingHook(calls.clone())))
            .execute()
            .unwrap();

        assert!(outcome.written);
        assert!(outcome.report_path.exists());
        assert!(dir.path().join("analysis.json").exists());
        assert_eq!(outcome.analysis.record_count, 2);
        assert_eq!(calls.borrow().as_slice(), &[outcome.report_path.clone()]);
    }

    #[test]
    fn test_missing_input_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = ReportConfig {
            input_path:  dir.path().join("absent.csv").display().to_string(),
            output_path: dir.path().join("report.pdf").display().to_string(),
            ..ReportConfig::default()
        };

        let err = ReportUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::InputNotFound { .. })
        ));
        assert!(!dir.path().join("report.pdf").exists());
    }

    #[test]
    fn test_mismatched_row_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path(), "a,b\n1,2\n3\n");

        let err = ReportUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::RecordMismatch { .. })
        ));
        assert!(!dir.path().join("report.pdf").exists());
        assert!(!dir.path().join("analysis.json").exists());
    }

    #[test]
    fn test_header_only_and_empty_files_render_two_pages() {
        for csv in ["a,b\n", ""] {
            let dir = tempfile::tempdir().unwrap();
            let cfg = config_in(dir.path(), csv);

            let outcome = ReportUseCase::new(cfg).execute().unwrap();
            assert!(outcome.written);
            assert_eq!(outcome.analysis.record_count, 0);
            let pdf = lopdf::Document::load(&outcome.report_path).unwrap();
            assert_eq!(pdf.get_pages().len(), 2);
        }
    }

    #[test]
    fn test_failing_hook_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path(), "a\n1\n");

        let outcome = ReportUseCase::with_hook(cfg, Box::new(FailingHook))
            .execute()
            .unwrap();
        assert!(outcome.written);
    }

    #[test]
    fn test_config_json_roundtrip_defaults() {
        let json = serde_json::to_string(&ReportConfig::default()).unwrap();
        let back: ReportConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ReportConfig::default());
        assert_eq!(back.output_path, "sales_report.pdf");
    }
}
