// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Two subcommands:
//   report  - load, analyse, and write the PDF report
//   analyze - load and analyse only, print the JSON summary
//
// Input and output paths can also come from the environment
// (CSV_REPORT_INPUT / CSV_REPORT_OUTPUT) via clap's `env` feature.

use clap::{Args, Subcommand};

use crate::application::report_use_case::ReportConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyse a CSV file and write a PDF report
    Report(ReportArgs),

    /// Analyse a CSV file and print the summary as JSON
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// CSV file to read (first line is the header)
    #[arg(long, short, env = "CSV_REPORT_INPUT", default_value = "data.csv")]
    pub input: String,

    /// Where to write the PDF report
    #[arg(long, short, env = "CSV_REPORT_OUTPUT", default_value = "sales_report.pdf")]
    pub output: String,

    /// Open the finished report in the system's default viewer
    #[arg(long)]
    pub open: bool,

    /// Also write the computed analysis to this JSON file
    #[arg(long)]
    pub json: Option<String>,
}

/// Convert CLI ReportArgs into the application-layer ReportConfig.
/// The application layer never sees clap types.
impl From<ReportArgs> for ReportConfig {
    fn from(a: ReportArgs) -> Self {
        ReportConfig {
            input_path:    a.input,
            output_path:   a.output,
            open_report:   a.open,
            analysis_json: a.json,
        }
    }
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// CSV file to read (first line is the header)
    #[arg(long, short, env = "CSV_REPORT_INPUT", default_value = "data.csv")]
    pub input: String,

    /// Write the JSON here instead of printing it
    #[arg(long)]
    pub json: Option<String>,
}
