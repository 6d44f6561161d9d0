//! Buffered line source for order files.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::record::RawLine;

/// Streams numbered lines from an order file.
///
/// Line numbers are 1-based, matching what the error log reports. I/O
/// failures surface per item so the caller decides how fatal they are.
#[derive(Debug)]
pub struct LineReader {
    lines: io::Lines<BufReader<File>>,
    next_number: u64,
}

impl LineReader {
    /// Opens the file at `path` for line-by-line reading.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            next_number: 0,
        })
    }
}

impl Iterator for LineReader {
    type Item = io::Result<RawLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.lines.next()?;
        self.next_number += 1;
        Some(text.map(|text| RawLine::new(self.next_number, text)))
    }
}
