use serde::{Deserialize, Serialize};

/// Number of `|`-separated fields in a well-formed order record.
pub const FIELDS_PER_RECORD: usize = 6;

/// Order identifier exactly as it appears in the input file.
///
/// Wraps the raw string to provide type safety and prevent mixing up
/// order ids with other string-valued fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Creates an order id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the order id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The six unparsed field strings of one order record.
///
/// Produced by the record parser after splitting and trimming. Carries no
/// interpretation beyond field position; the validator turns these strings
/// into typed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    pub order_id: String,
    pub customer: String,
    pub product: String,
    pub quantity: String,
    pub unit_price: String,
    pub order_date: String,
}

impl RecordFields {
    /// Builds record fields from exactly [`FIELDS_PER_RECORD`] split parts.
    ///
    /// Returns `None` when the slice has a different length; the field-count
    /// decision stays with the caller.
    pub fn from_parts(parts: &[&str]) -> Option<Self> {
        match parts {
            [order_id, customer, product, quantity, unit_price, order_date] => Some(Self {
                order_id: (*order_id).to_string(),
                customer: (*customer).to_string(),
                product: (*product).to_string(),
                quantity: (*quantity).to_string(),
                unit_price: (*unit_price).to_string(),
                order_date: (*order_date).to_string(),
            }),
            _ => None,
        }
    }
}
