//! Command-line interface for the report importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use thiserror::Error;

use crate::error::ParseError;
use crate::parser::aggregate;
use crate::results::UnitTestResults;

/// NUnit report importer - Summarize NUnit test result files.
#[derive(Parser)]
#[command(name = "nunit-report")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate one or more report files into a single summary.
    Summarize {
        /// NUnit 2.x or 3.x XML report files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How the summary is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Errors raised by the CLI on top of report parsing.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Run the CLI.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize { files, format } => summarize_command(&files, format),
    }
}

/// Execute the summarize command.
fn summarize_command(files: &[PathBuf], format: OutputFormat) -> Result<(), CliError> {
    let results = aggregate(files)?;
    tracing::info!(files = files.len(), "Aggregated test reports");

    print!("{}", render(&results, format)?);
    Ok(())
}

/// Render a summary in the requested format.
pub fn render(results: &UnitTestResults, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(results)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(results)?)),
        OutputFormat::Yaml => Ok(serde_yaml_ng::to_string(results)?),
    }
}

fn render_text(results: &UnitTestResults) -> String {
    let time = results
        .execution_time()
        .map_or_else(|| "n/a".to_string(), |ms| format!("{ms} ms"));

    let mut out = String::new();
    out.push_str(&format!("  Tests: {}\n", style(results.tests()).bold()));
    out.push_str(&format!("  Passed: {}\n", style(results.passed()).green()));
    out.push_str(&format!("  Failures: {}\n", style(results.failures()).red()));
    out.push_str(&format!("  Errors: {}\n", style(results.errors()).red()));
    out.push_str(&format!("  Skipped: {}\n", style(results.skipped()).yellow()));
    out.push_str(&format!("  Execution time: {time}\n"));
    out
}
