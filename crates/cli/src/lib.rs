//! Pipeline driver and run-level errors for the `orderflow` binary.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{RunOptions, RunSummary, run};
