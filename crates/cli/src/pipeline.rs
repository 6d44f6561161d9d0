//! The pipeline driver: read, route, fold, render, write.

use std::fs;
use std::path::{Path, PathBuf};

use domain::{OrderLineItem, PricedLineItem};
use ingest::{LineReader, ParseOutcome, Rejection, split_record};
use projections::{CustomerInvoicesView, Projection, ReadModel, RejectionLogView, report};

use crate::error::PipelineError;

/// File locations for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub report: PathBuf,
    pub errors: PathBuf,
}

/// Counters describing a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: u64,
    pub records_accepted: u64,
    pub records_rejected: u64,
    pub customers: usize,
}

/// Runs the whole pipeline over one input file.
///
/// Each non-skipped line goes through parse, validate, and price; valid
/// items feed the invoice view, failures feed the rejection log. Both
/// output files are always written, the error log even when empty.
/// Rejections never abort the run; only I/O failures are fatal.
#[tracing::instrument(skip(options), fields(input = %options.input.display()))]
pub fn run(options: &RunOptions) -> Result<RunSummary, PipelineError> {
    let read_failed = |source| PipelineError::Input {
        path: options.input.clone(),
        source,
    };
    let reader = LineReader::open(&options.input).map_err(read_failed)?;

    let mut invoices = CustomerInvoicesView::new();
    let mut rejections = RejectionLogView::new();
    let mut summary = RunSummary::default();

    for line in reader {
        let raw = line.map_err(read_failed)?;
        summary.lines_read += 1;
        metrics::counter!("orderflow_lines_read").increment(1);

        match split_record(&raw) {
            ParseOutcome::Skip => {
                tracing::debug!(line = raw.number, "skipping blank or comment line");
            }
            ParseOutcome::Rejected(rejection) => {
                reject(&mut rejections, &mut summary, rejection);
            }
            ParseOutcome::Fields(fields) => match OrderLineItem::from_record(&fields) {
                Ok(item) => {
                    invoices.absorb(&PricedLineItem::price(item));
                    summary.records_accepted += 1;
                    metrics::counter!("orderflow_records_accepted").increment(1);
                }
                Err(error) => {
                    reject(&mut rejections, &mut summary, Rejection::new(&raw, error));
                }
            },
        }
    }

    summary.customers = invoices.count();

    write_output(&options.report, &report::render(&invoices.finalize()))?;
    write_output(&options.errors, &rejections.render())?;

    tracing::info!(
        lines_read = summary.lines_read,
        records_accepted = summary.records_accepted,
        records_rejected = summary.records_rejected,
        customers = summary.customers,
        "run complete"
    );

    Ok(summary)
}

fn reject(log: &mut RejectionLogView, summary: &mut RunSummary, rejection: Rejection) {
    tracing::debug!(
        line = rejection.line,
        category = %rejection.category(),
        "record rejected"
    );
    log.absorb(&rejection);
    summary.records_rejected += 1;
    metrics::counter!("orderflow_records_rejected").increment(1);
}

fn write_output(path: &Path, contents: &str) -> Result<(), PipelineError> {
    fs::write(path, contents).map_err(|source| PipelineError::Output {
        path: path.to_path_buf(),
        source,
    })
}
