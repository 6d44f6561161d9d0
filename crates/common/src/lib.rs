//! Shared types for the order invoice pipeline.

pub mod types;

pub use types::{FIELDS_PER_RECORD, OrderId, RecordFields};
