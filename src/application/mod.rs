//! Application layer containing the pricing logic and its orchestration.
//!
//! `PriceAdjustmentEngine` holds the pure coupon and point rules, while
//! `Checkout` owns one pricing session and gates it behind the order's
//! loading state.

pub mod checkout;
pub mod engine;
