use crate::domain::coupon::Coupon;
use crate::domain::points::{MAX_REDEEMABLE_POINTS, PointBalance};
use crate::domain::price::Price;
use crate::domain::session::PricingSession;
use crate::error::{PricingError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

/// Computes the payable price of a checkout from its base price, at most one
/// coupon and at most one point redemption.
///
/// Coupons are always evaluated before points: a coupon discounts the base
/// price, and points are deducted from the post-coupon price. Both operations
/// are pure; on failure the caller's session is left as it was.
pub struct PriceAdjustmentEngine;

impl PriceAdjustmentEngine {
    /// Applies `coupon` to the session's base price.
    ///
    /// Any earlier point redemption is discarded: after a successful call
    /// `final_price == price_after_coupon` and `points_input == 0`.
    ///
    /// # Errors
    ///
    /// * `InvalidDiscount` if a fixed-amount coupon exceeds the base price.
    /// * `MalformedCouponValue` if the coupon carries an out-of-range value.
    pub fn apply_coupon(session: &PricingSession, coupon: &Coupon) -> Result<PricingSession> {
        coupon.validate()?;

        let price_after_coupon = match *coupon {
            Coupon::Percentage(percent) => percentage_off(session.base_price, percent)?,
            Coupon::FixedAmount(amount) => session
                .base_price
                .checked_sub(amount.value())
                .ok_or_else(|| {
                    PricingError::InvalidDiscount(format!(
                        "coupon of {} exceeds price of {}",
                        amount, session.base_price
                    ))
                })?,
        };

        debug!(
            %coupon,
            base_price = %session.base_price,
            %price_after_coupon,
            "coupon applied"
        );

        Ok(PricingSession {
            base_price: session.base_price,
            price_after_coupon,
            final_price: price_after_coupon,
            points_input: 0,
        })
    }

    /// Deducts `points` from the post-coupon price.
    ///
    /// Requests above [`MAX_REDEEMABLE_POINTS`] are ignored: the session is
    /// returned unchanged and no error is raised.
    ///
    /// # Errors
    ///
    /// * `InvalidDiscount` if the deduction would take the price below zero.
    pub fn apply_points(session: &PricingSession, points: u64) -> Result<PricingSession> {
        if !PointBalance::within_ceiling(points) {
            warn!(
                points,
                ceiling = MAX_REDEEMABLE_POINTS,
                "point request over ceiling ignored"
            );
            return Ok(*session);
        }

        let final_price = session
            .price_after_coupon
            .checked_sub(points)
            .ok_or_else(|| {
                PricingError::InvalidDiscount(format!(
                    "{} points exceed price of {}",
                    points, session.price_after_coupon
                ))
            })?;

        debug!(points, %final_price, "points applied");

        Ok(PricingSession {
            final_price,
            points_input: points,
            ..*session
        })
    }
}

/// `round(price × (1 − percent/100))`, rounding halves away from zero.
fn percentage_off(price: Price, percent: u8) -> Result<Price> {
    let factor = Decimal::ONE - Decimal::from(percent) / Decimal::ONE_HUNDRED;
    let discounted = (Decimal::from(price.value()) * factor)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    discounted.to_u64().map(Price::new).ok_or_else(|| {
        PricingError::InvalidDiscount(format!("{percent}% off {price} is out of range"))
    })
}
