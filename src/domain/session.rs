use super::order::Order;
use super::price::Price;
use serde::Serialize;

/// Pricing state for one checkout attempt.
///
/// Sessions are plain values: engine operations take a session and hand back
/// a new one, so a rejected adjustment simply leaves the caller's copy as it
/// was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingSession {
    /// Price of the order before any adjustment.
    pub base_price: Price,
    /// Price after the most recently applied coupon.
    pub price_after_coupon: Price,
    /// Price after the most recently applied point redemption.
    pub final_price: Price,
    /// Points deducted by the current redemption.
    pub points_input: u64,
}

impl PricingSession {
    pub fn new(base_price: Price) -> Self {
        Self {
            base_price,
            price_after_coupon: base_price,
            final_price: base_price,
            points_input: 0,
        }
    }

    pub fn for_order(order: &Order) -> Self {
        Self::new(order.base_price())
    }
}
