//! Customer invoices read model — per-customer invoice totals.

use std::collections::{HashMap, HashSet};

use common::OrderId;
use domain::{Money, PricedLineItem};
use serde::Serialize;

use crate::projection::{Projection, ProjectionPosition};
use crate::read_model::ReadModel;

/// Running invoice totals for one customer.
///
/// Mutated only by the owning view, one priced line item at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSummary {
    pub customer: String,
    /// Distinct order ids seen for this customer.
    pub order_ids: HashSet<OrderId>,
    /// Total quantity across all line items.
    pub items: u64,
    pub gross_total: Money,
    pub discount_total: Money,
    pub net_total: Money,
}

impl CustomerSummary {
    fn new(customer: String) -> Self {
        Self {
            customer,
            order_ids: HashSet::new(),
            items: 0,
            gross_total: Money::zero(),
            discount_total: Money::zero(),
            net_total: Money::zero(),
        }
    }

    /// Number of distinct orders seen for this customer.
    pub fn distinct_orders(&self) -> u64 {
        self.order_ids.len() as u64
    }
}

/// Column sums across all customers.
///
/// `orders` sums the per-customer distinct counts, not the number of
/// customers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GrandTotal {
    pub orders: u64,
    pub items: u64,
    pub gross_total: Money,
    pub discount_total: Money,
    pub net_total: Money,
}

/// The finalized aggregate handed to the report renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceReport {
    /// Customer rows sorted by name, ascending, case-sensitive.
    pub rows: Vec<CustomerSummary>,
    pub grand: GrandTotal,
}

/// Read model view folding priced line items into per-customer invoices.
///
/// Repeated order ids for a customer count once toward the distinct-order
/// tally, but every line item contributes to the totals.
#[derive(Debug, Default)]
pub struct CustomerInvoicesView {
    customers: HashMap<String, CustomerSummary>,
    position: ProjectionPosition,
}

impl CustomerInvoicesView {
    /// Creates a new empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the running summary for a specific customer.
    pub fn get_customer(&self, customer: &str) -> Option<&CustomerSummary> {
        self.customers.get(customer)
    }

    /// Finalizes the fold into ordered report rows plus grand totals.
    ///
    /// Rows sort by customer name ascending on the original text, so output
    /// is reproducible regardless of input order.
    pub fn finalize(&self) -> InvoiceReport {
        let mut rows: Vec<CustomerSummary> = self.customers.values().cloned().collect();
        rows.sort_by(|a, b| a.customer.cmp(&b.customer));

        let mut grand = GrandTotal::default();
        for row in &rows {
            grand.orders += row.distinct_orders();
            grand.items += row.items;
            grand.gross_total += row.gross_total;
            grand.discount_total += row.discount_total;
            grand.net_total += row.net_total;
        }

        InvoiceReport { rows, grand }
    }
}

impl Projection for CustomerInvoicesView {
    type Item = PricedLineItem;

    fn name(&self) -> &'static str {
        "CustomerInvoicesView"
    }

    fn absorb(&mut self, priced: &PricedLineItem) {
        let entry = self
            .customers
            .entry(priced.item.customer.clone())
            .or_insert_with(|| CustomerSummary::new(priced.item.customer.clone()));

        entry.order_ids.insert(priced.item.order_id.clone());
        entry.items += u64::from(priced.item.quantity);
        entry.gross_total += priced.line_total;
        entry.discount_total += priced.discount;
        entry.net_total += priced.net_total;

        self.position = self.position.advance();
    }

    fn position(&self) -> ProjectionPosition {
        self.position
    }
}

impl ReadModel for CustomerInvoicesView {
    fn name(&self) -> &'static str {
        "CustomerInvoicesView"
    }

    fn count(&self) -> usize {
        self.customers.len()
    }
}
