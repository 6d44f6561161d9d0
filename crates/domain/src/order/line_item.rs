//! Validated order line items.

use chrono::NaiveDate;
use common::{OrderId, RecordFields};
use serde::{Deserialize, Serialize};

use super::OrderError;
use super::value_objects::Money;

/// A fully validated line item of one order.
///
/// Instances exist only for records that passed every field-level check;
/// construction and validation are one step, so no partially-valid state
/// is representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub order_id: OrderId,
    pub customer: String,
    pub product: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub order_date: NaiveDate,
}

impl OrderLineItem {
    /// Validates the six raw fields and constructs the line item.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// required text fields, quantity, unit price, order date.
    pub fn from_record(record: &RecordFields) -> Result<Self, OrderError> {
        let order_id = required(&record.order_id, "OrderID")?;
        let customer = required(&record.customer, "CustomerName")?;
        let product = required(&record.product, "ProductName")?;
        let quantity = parse_quantity(&record.quantity)?;
        let unit_price = parse_unit_price(&record.unit_price)?;
        let order_date = parse_order_date(&record.order_date)?;

        Ok(Self {
            order_id: OrderId::new(order_id),
            customer: customer.to_string(),
            product: product.to_string(),
            quantity,
            unit_price,
            order_date,
        })
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, OrderError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(OrderError::EmptyField { field })
    } else {
        Ok(trimmed)
    }
}

fn parse_quantity(raw: &str) -> Result<u32, OrderError> {
    let invalid = || OrderError::InvalidQuantity {
        raw: raw.trim().to_string(),
    };
    match raw.trim().parse::<i64>() {
        Ok(quantity) if quantity > 0 => u32::try_from(quantity).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

fn parse_unit_price(raw: &str) -> Result<Money, OrderError> {
    let invalid = || OrderError::InvalidPrice {
        raw: raw.trim().to_string(),
    };
    let price: Money = raw.trim().parse().map_err(|_| invalid())?;
    if price.is_negative() {
        return Err(invalid());
    }
    Ok(price)
}

fn parse_order_date(raw: &str) -> Result<NaiveDate, OrderError> {
    let invalid = || OrderError::InvalidDate {
        raw: raw.trim().to_string(),
    };
    let trimmed = raw.trim();
    // Strict YYYY-MM-DD shape; chrono alone would accept unpadded parts.
    let bytes = trimmed.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid())
}
