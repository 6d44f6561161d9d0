//! Line-item pricing and the volume discount rule.

use serde::{Deserialize, Serialize};

use super::line_item::OrderLineItem;
use super::value_objects::Money;

/// Line totals strictly above this amount earn the volume discount.
pub const DISCOUNT_THRESHOLD: Money = Money::from_cents(500_00);

/// Volume discount rate in basis points (10%).
pub const DISCOUNT_RATE_BPS: u32 = 1_000;

/// A line item with its computed totals.
///
/// All three amounts are fixed here and never re-rounded downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedLineItem {
    pub item: OrderLineItem,
    pub line_total: Money,
    pub discount: Money,
    pub net_total: Money,
}

impl PricedLineItem {
    /// Prices one line item. Pure; no shared state.
    ///
    /// The discount applies only when the line total strictly exceeds
    /// [`DISCOUNT_THRESHOLD`]. The comparison uses the computed line total,
    /// the same value that appears in the report.
    pub fn price(item: OrderLineItem) -> Self {
        let line_total = item.unit_price.multiply(item.quantity);
        let discount = if line_total > DISCOUNT_THRESHOLD {
            line_total.basis_points(DISCOUNT_RATE_BPS)
        } else {
            Money::zero()
        };
        let net_total = line_total - discount;

        Self {
            item,
            line_total,
            discount,
            net_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::RecordFields;

    fn item(quantity: &str, unit_price: &str) -> OrderLineItem {
        let record = RecordFields::from_parts(&[
            "ORD001",
            "John Smith",
            "Laptop",
            quantity,
            unit_price,
            "2024-03-15",
        ])
        .unwrap();
        OrderLineItem::from_record(&record).unwrap()
    }

    #[test]
    fn laptop_example_prices_as_documented() {
        let priced = PricedLineItem::price(item("2", "999.99"));
        assert_eq!(priced.line_total, Money::from_cents(199_998));
        assert_eq!(priced.discount, Money::from_cents(20_000));
        assert_eq!(priced.net_total, Money::from_cents(179_998));
    }

    #[test]
    fn exactly_500_gets_no_discount() {
        let priced = PricedLineItem::price(item("1", "500.00"));
        assert_eq!(priced.line_total, Money::from_cents(50_000));
        assert_eq!(priced.discount, Money::zero());
        assert_eq!(priced.net_total, Money::from_cents(50_000));
    }

    #[test]
    fn a_cent_over_500_gets_the_discount() {
        let priced = PricedLineItem::price(item("1", "500.01"));
        assert_eq!(priced.line_total, Money::from_cents(50_001));
        // 10% of $500.01 is $50.001, rounding to $50.00.
        assert_eq!(priced.discount, Money::from_cents(5_000));
        assert_eq!(priced.net_total, Money::from_cents(45_001));
    }

    #[test]
    fn threshold_reached_by_quantity() {
        let priced = PricedLineItem::price(item("101", "5.00"));
        assert_eq!(priced.line_total, Money::from_cents(50_500));
        assert_eq!(priced.discount, Money::from_cents(5_050));
        assert_eq!(priced.net_total, Money::from_cents(45_450));
    }

    #[test]
    fn zero_price_line_is_priced_to_zero() {
        let priced = PricedLineItem::price(item("3", "0.00"));
        assert_eq!(priced.line_total, Money::zero());
        assert_eq!(priced.discount, Money::zero());
        assert_eq!(priced.net_total, Money::zero());
    }

    #[test]
    fn discount_plus_net_equals_gross() {
        for (quantity, unit_price) in [("2", "999.99"), ("1", "500.01"), ("7", "123.45")] {
            let priced = PricedLineItem::price(item(quantity, unit_price));
            assert_eq!(priced.discount + priced.net_total, priced.line_total);
        }
    }

    #[test]
    fn pricing_is_deterministic() {
        let a = PricedLineItem::price(item("2", "999.99"));
        let b = PricedLineItem::price(item("2", "999.99"));
        assert_eq!(a, b);
    }
}
