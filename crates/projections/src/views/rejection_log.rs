//! Rejection log read model — the append-only error sink.

use ingest::Rejection;

use crate::projection::{Projection, ProjectionPosition};
use crate::read_model::ReadModel;

/// Collects rejected records and renders the error log.
///
/// Exactly one entry per failed line: the pipeline routes each rejection
/// here once, and nothing is ever dropped.
#[derive(Debug, Default)]
pub struct RejectionLogView {
    rejections: Vec<Rejection>,
    position: ProjectionPosition,
}

impl RejectionLogView {
    /// Creates a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rejections in ascending input line order.
    ///
    /// Sorting happens here rather than at absorb time so producers that
    /// deliver out of order would still serialize correctly.
    pub fn finalize(&self) -> Vec<Rejection> {
        let mut ordered = self.rejections.clone();
        ordered.sort_by_key(|rejection| rejection.line);
        ordered
    }

    /// Renders the error log, one line per rejection.
    ///
    /// Empty when no records were rejected; the caller still writes the
    /// file so a clean run leaves an empty log behind.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for rejection in self.finalize() {
            out.push_str(&rejection.to_string());
            out.push('\n');
        }
        out
    }
}

impl Projection for RejectionLogView {
    type Item = Rejection;

    fn name(&self) -> &'static str {
        "RejectionLogView"
    }

    fn absorb(&mut self, rejection: &Rejection) {
        self.rejections.push(rejection.clone());
        self.position = self.position.advance();
    }

    fn position(&self) -> ProjectionPosition {
        self.position
    }
}

impl ReadModel for RejectionLogView {
    fn name(&self) -> &'static str {
        "RejectionLogView"
    }

    fn count(&self) -> usize {
        self.rejections.len()
    }
}
