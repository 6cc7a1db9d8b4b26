// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands the work to Layer 2.
// This is the only layer that prints user-facing text.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use commands::{AnalyzeArgs, Commands, ReportArgs};

/// How a successful command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Everything completed
    Completed,
    /// The writer returned but the report is not on disk
    ReportMissing,
}

#[derive(Parser, Debug)]
#[command(
    name = "csv-report",
    version,
    about = "Summarise a CSV file and render the result as a PDF report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case
    pub fn run(self) -> Result<RunStatus> {
        match self.command {
            Commands::Report(args)  => run_report(args),
            Commands::Analyze(args) => run_analyze(args),
        }
    }
}

fn run_report(args: ReportArgs) -> Result<RunStatus> {
    use crate::application::report_use_case::ReportUseCase;

    let use_case = ReportUseCase::new(args.into());
    let outcome  = use_case.execute()?;

    if outcome.written {
        println!(
            "Success! Report on {} records saved to: {}",
            outcome.analysis.record_count,
            outcome.report_path.display()
        );
        println!("Process completed successfully!");
        Ok(RunStatus::Completed)
    } else {
        println!("Error: Failed to create PDF file");
        Ok(RunStatus::ReportMissing)
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<RunStatus> {
    use crate::application::analyze_use_case::AnalyzeUseCase;
    use crate::infra::analysis_store::AnalysisStore;

    let analysis = AnalyzeUseCase::new(args.input).execute()?;

    match args.json {
        Some(path) => {
            AnalysisStore::save(&analysis, Path::new(&path))?;
            println!("Analysis saved to: {}", path);
        }
        None => println!("{}", AnalysisStore::to_json(&analysis)?),
    }
    Ok(RunStatus::Completed)
}
