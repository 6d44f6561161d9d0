//! Fixed-width invoice summary rendering.

use domain::Money;

use crate::views::{GrandTotal, InvoiceReport};

const CUSTOMER_WIDTH: usize = 22;
const COUNT_WIDTH: usize = 8;
const MONEY_WIDTH: usize = 14;
/// Width of the rule lines, spanning all six columns.
const RULE_WIDTH: usize = CUSTOMER_WIDTH + 2 * COUNT_WIDTH + 3 * MONEY_WIDTH;

/// Renders the finalized invoice summaries as the fixed-width report.
///
/// Zero customers still produces the full header, rules, and an all-zero
/// GRAND TOTAL row, so consumers always see a well-formed file.
pub fn render(report: &InvoiceReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<cw$}{:>nw$}{:>nw$}{:>mw$}{:>mw$}{:>mw$}\n",
        "Customer",
        "#Orders",
        "Items",
        "GrossTotal",
        "Discount",
        "NetTotal",
        cw = CUSTOMER_WIDTH,
        nw = COUNT_WIDTH,
        mw = MONEY_WIDTH,
    ));
    out.push_str(&rule_line());

    for row in &report.rows {
        out.push_str(&data_row(
            &row.customer,
            row.distinct_orders(),
            row.items,
            row.gross_total,
            row.discount_total,
            row.net_total,
        ));
    }

    out.push_str(&rule_line());
    let GrandTotal {
        orders,
        items,
        gross_total,
        discount_total,
        net_total,
    } = report.grand;
    out.push_str(&data_row(
        "GRAND TOTAL",
        orders,
        items,
        gross_total,
        discount_total,
        net_total,
    ));

    out
}

fn rule_line() -> String {
    let mut line = "-".repeat(RULE_WIDTH);
    line.push('\n');
    line
}

fn data_row(
    name: &str,
    orders: u64,
    items: u64,
    gross: Money,
    discount: Money,
    net: Money,
) -> String {
    format!(
        "{:<cw$}{:>nw$}{:>nw$}{:>mw$}{:>mw$}{:>mw$}\n",
        name,
        orders,
        items,
        gross.grouped(),
        discount.grouped(),
        net.grouped(),
        cw = CUSTOMER_WIDTH,
        nw = COUNT_WIDTH,
        mw = MONEY_WIDTH,
    )
}
