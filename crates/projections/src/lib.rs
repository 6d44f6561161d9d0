//! Read models and report rendering for the order invoice pipeline.
//!
//! This crate provides the fold side of the pipeline:
//! - [`Projection`] trait for absorbing pipeline items into read models
//! - [`ReadModel`] trait for query access to the folded data
//! - [`CustomerInvoicesView`], the per-customer invoice aggregator
//! - [`RejectionLogView`], the append-only error sink
//! - [`report::render`] for the fixed-width summary report

pub mod projection;
pub mod read_model;
pub mod report;
pub mod views;

pub use projection::{Projection, ProjectionPosition};
pub use read_model::ReadModel;
pub use views::{CustomerInvoicesView, CustomerSummary, GrandTotal, InvoiceReport, RejectionLogView};
