//! Record parsing: one raw line becomes fields, a skip, or a rejection.

use common::{FIELDS_PER_RECORD, RecordFields};
use domain::{OrderError, RejectCategory};
use serde::{Deserialize, Serialize};

/// One line of the input file, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLine {
    pub number: u64,
    pub text: String,
}

impl RawLine {
    /// Creates a raw line.
    pub fn new(number: u64, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// What the parser decided about one raw line.
///
/// Skips are neither records nor errors; comment and blank lines never
/// reach validation and never appear in the error log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Blank or comment line; ignored entirely.
    Skip,
    /// The line cannot become a record.
    Rejected(Rejection),
    /// Six unparsed field strings, ready for validation.
    Fields(RecordFields),
}

/// A failed line on its way to the error log.
///
/// Keeps the original text and 1-based line number so a human can locate
/// and fix the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub line: u64,
    pub raw: String,
    pub error: OrderError,
}

impl Rejection {
    /// Wraps a validation failure with its originating line.
    pub fn new(line: &RawLine, error: OrderError) -> Self {
        Self {
            line: line.number,
            raw: line.text.clone(),
            error,
        }
    }

    /// Returns the rejection category of the underlying error.
    pub fn category(&self) -> RejectCategory {
        self.error.category()
    }
}

/// Error-log line format: `line <n>: <category> — <detail> | raw: <text>`.
impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: {} — {} | raw: {}",
            self.line,
            self.category(),
            self.error,
            self.raw
        )
    }
}

/// Splits one raw line into record fields.
///
/// Trimmed-empty lines and lines starting with `#` are skips. Anything
/// else must split on `|` into exactly [`FIELDS_PER_RECORD`] fields, each
/// trimmed. Field contents are not interpreted here.
pub fn split_record(line: &RawLine) -> ParseOutcome {
    let trimmed = line.text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return ParseOutcome::Skip;
    }

    let parts: Vec<&str> = trimmed.split('|').map(str::trim).collect();
    match RecordFields::from_parts(&parts) {
        Some(fields) => ParseOutcome::Fields(fields),
        None => ParseOutcome::Rejected(Rejection::new(
            line,
            OrderError::FieldCount {
                found: parts.len(),
                expected: FIELDS_PER_RECORD,
            },
        )),
    }
}
