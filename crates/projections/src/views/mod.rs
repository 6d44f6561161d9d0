//! Read model views fed by the pipeline.

mod customer_invoices;
mod rejection_log;

pub use customer_invoices::{CustomerInvoicesView, CustomerSummary, GrandTotal, InvoiceReport};
pub use rejection_log::RejectionLogView;
