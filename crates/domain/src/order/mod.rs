//! Order records and related types.

mod line_item;
mod pricing;
mod value_objects;

pub use line_item::OrderLineItem;
pub use pricing::{DISCOUNT_RATE_BPS, DISCOUNT_THRESHOLD, PricedLineItem};
pub use value_objects::{Money, MoneyParseError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of categories a record can be rejected under.
///
/// Downstream tooling branches on the category; the human-readable detail
/// text carried by [`OrderError`] is free-form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectCategory {
    FieldCount,
    EmptyRequiredField,
    InvalidQuantity,
    InvalidPrice,
    InvalidDate,
}

impl std::fmt::Display for RejectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RejectCategory::FieldCount => "FieldCount",
            RejectCategory::EmptyRequiredField => "EmptyRequiredField",
            RejectCategory::InvalidQuantity => "InvalidQuantity",
            RejectCategory::InvalidPrice => "InvalidPrice",
            RejectCategory::InvalidDate => "InvalidDate",
        };
        write!(f, "{name}")
    }
}

/// Errors that reject a single order record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Record does not split into the expected number of fields.
    #[error("wrong field count: {found}, expected {expected}")]
    FieldCount { found: usize, expected: usize },

    /// A required text field is empty after trimming.
    #[error("required field {field} is empty")]
    EmptyField { field: &'static str },

    /// Quantity is not a positive integer.
    #[error("invalid quantity {raw:?}: must be a positive integer")]
    InvalidQuantity { raw: String },

    /// Unit price is not a non-negative amount.
    #[error("invalid unit price {raw:?}: must be a non-negative amount")]
    InvalidPrice { raw: String },

    /// Order date is not a real calendar date in YYYY-MM-DD form.
    #[error("invalid order date {raw:?}: expected YYYY-MM-DD")]
    InvalidDate { raw: String },
}

impl OrderError {
    /// Returns the rejection category this error falls under.
    pub fn category(&self) -> RejectCategory {
        match self {
            OrderError::FieldCount { .. } => RejectCategory::FieldCount,
            OrderError::EmptyField { .. } => RejectCategory::EmptyRequiredField,
            OrderError::InvalidQuantity { .. } => RejectCategory::InvalidQuantity,
            OrderError::InvalidPrice { .. } => RejectCategory::InvalidPrice,
            OrderError::InvalidDate { .. } => RejectCategory::InvalidDate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display_is_stable() {
        assert_eq!(RejectCategory::FieldCount.to_string(), "FieldCount");
        assert_eq!(
            RejectCategory::EmptyRequiredField.to_string(),
            "EmptyRequiredField"
        );
        assert_eq!(RejectCategory::InvalidQuantity.to_string(), "InvalidQuantity");
        assert_eq!(RejectCategory::InvalidPrice.to_string(), "InvalidPrice");
        assert_eq!(RejectCategory::InvalidDate.to_string(), "InvalidDate");
    }

    #[test]
    fn errors_map_to_their_category() {
        let err = OrderError::FieldCount {
            found: 5,
            expected: 6,
        };
        assert_eq!(err.category(), RejectCategory::FieldCount);

        let err = OrderError::EmptyField { field: "OrderID" };
        assert_eq!(err.category(), RejectCategory::EmptyRequiredField);

        let err = OrderError::InvalidQuantity { raw: "0".into() };
        assert_eq!(err.category(), RejectCategory::InvalidQuantity);

        let err = OrderError::InvalidPrice { raw: "-1".into() };
        assert_eq!(err.category(), RejectCategory::InvalidPrice);

        let err = OrderError::InvalidDate {
            raw: "not-a-date".into(),
        };
        assert_eq!(err.category(), RejectCategory::InvalidDate);
    }
}
