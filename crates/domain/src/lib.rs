//! Domain layer for the order invoice pipeline.
//!
//! This crate provides the pure business logic:
//! - `Money` fixed-point arithmetic with half-up rounding
//! - `OrderLineItem` construction with atomic field validation
//! - `PricedLineItem` with the volume discount rule

pub mod order;

pub use order::{
    DISCOUNT_RATE_BPS, DISCOUNT_THRESHOLD, Money, MoneyParseError, OrderError, OrderLineItem,
    PricedLineItem, RejectCategory,
};
