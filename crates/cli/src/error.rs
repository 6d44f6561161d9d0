//! Run-level pipeline errors.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a run.
///
/// Record-level failures never appear here; they flow to the error log
/// and the run continues.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input file cannot be opened or read.
    #[error("cannot read input file {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file cannot be written.
    #[error("cannot write output file {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
