use super::price::{Price, parse_amount};
use crate::error::PricingError;
use std::fmt;
use std::str::FromStr;

/// A discount descriptor.
///
/// Coupons are parsed once at the catalog boundary, so the engine only ever
/// sees validated values: a percentage strictly between 0 and 100, or a
/// positive fixed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coupon {
    Percentage(u8),
    FixedAmount(Price),
}

/// The coupons offered at checkout.
pub const COUPON_CATALOG: [Coupon; 2] = [
    Coupon::FixedAmount(Price::new(5_000)),
    Coupon::Percentage(10),
];

impl Coupon {
    pub fn percentage(value: u8) -> Result<Self, PricingError> {
        if value > 0 && value < 100 {
            Ok(Self::Percentage(value))
        } else {
            Err(PricingError::MalformedCouponValue(format!("{value}%")))
        }
    }

    pub fn fixed_amount(value: u64) -> Result<Self, PricingError> {
        if value > 0 {
            Ok(Self::FixedAmount(Price::new(value)))
        } else {
            Err(PricingError::MalformedCouponValue(value.to_string()))
        }
    }

    /// Re-checks the value range for coupons built directly from the variants.
    pub fn validate(&self) -> Result<(), PricingError> {
        match *self {
            Coupon::Percentage(value) => Self::percentage(value).map(|_| ()),
            Coupon::FixedAmount(value) => Self::fixed_amount(value.value()).map(|_| ()),
        }
    }

    pub fn catalog() -> &'static [Coupon] {
        &COUPON_CATALOG
    }
}

impl fmt::Display for Coupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coupon::Percentage(value) => write!(f, "{value}%"),
            Coupon::FixedAmount(value) => write!(f, "{}", value.label()),
        }
    }
}

/// Parses the catalog encodings: `10%` or `5,000원`.
impl FromStr for Coupon {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PricingError::MalformedCouponValue(s.to_string());
        let trimmed = s.trim();

        if let Some(percent) = trimmed.strip_suffix('%') {
            let value: u8 = percent.trim().parse().map_err(|_| malformed())?;
            Self::percentage(value).map_err(|_| malformed())
        } else {
            let value = parse_amount(trimmed).ok_or_else(malformed)?;
            Self::fixed_amount(value).map_err(|_| malformed())
        }
    }
}
