//! Order invoice pipeline entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::pipeline::{self, RunOptions};

/// Generate an invoice summary and error log from a pipe-delimited
/// order file.
#[derive(Parser)]
#[command(name = "orderflow", about = "Order file invoice summary generator", version)]
struct Args {
    /// Path to the pipe-delimited order file
    #[arg(default_value = "orders.txt")]
    input: PathBuf,

    /// Where to write the summary report
    #[arg(long, default_value = "summary_report.txt")]
    report: PathBuf,

    /// Where to write the error log
    #[arg(long, default_value = "error_log.txt")]
    errors: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let options = RunOptions {
        input: args.input,
        report: args.report,
        errors: args.errors,
    };

    match pipeline::run(&options) {
        Ok(summary) => {
            tracing::info!(
                report = %options.report.display(),
                errors = %options.errors.display(),
                rejected = summary.records_rejected,
                "outputs written"
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "run aborted");
            eprintln!("orderflow: {error}");
            ExitCode::FAILURE
        }
    }
}
