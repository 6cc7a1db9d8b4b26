mod cli;
mod application;
mod domain;
mod data;
mod report;
mod infra;

use clap::Parser;
use cli::{Cli, RunStatus};
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("csv_report=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();
    match cli.run() {
        Ok(RunStatus::Completed)     => ExitCode::SUCCESS,
        Ok(RunStatus::ReportMissing) => ExitCode::from(2),
        Err(e) => {
            tracing::error!("Error occurred: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
