//! File ingestion for the order invoice pipeline.
//!
//! This crate turns an input file into per-line outcomes:
//! - [`LineReader`] streams numbered raw lines
//! - [`split_record`] classifies one line as skip, rejection, or fields
//! - [`Rejection`] carries a failed line to the error log

pub mod reader;
pub mod record;

pub use reader::LineReader;
pub use record::{ParseOutcome, RawLine, Rejection, split_record};
