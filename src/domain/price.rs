use crate::error::PricingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency unit suffix used by product and coupon labels.
pub const CURRENCY_SUFFIX: &str = "원";

/// A non-negative amount in whole currency units.
///
/// Prices never go below zero: subtraction is only exposed through
/// [`Price::checked_sub`], leaving the caller to decide how to reject an
/// over-large discount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    pub fn checked_sub(self, rhs: u64) -> Option<Self> {
        self.0.checked_sub(rhs).map(Self)
    }

    /// Renders the price the way the storefront labels it, e.g. `10,000원`.
    pub fn label(&self) -> String {
        format!("{}{}", group_thousands(self.0), CURRENCY_SUFFIX)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses labels such as `10,000원`, `10000` or ` 5,000 `.
impl FromStr for Price {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_amount(s)
            .map(Self)
            .ok_or_else(|| PricingError::MalformedPrice(s.to_string()))
    }
}

/// Parses an amount label: surrounding whitespace and an optional currency
/// suffix are allowed, the number itself goes through [`parse_grouped`].
pub(crate) fn parse_amount(s: &str) -> Option<u64> {
    let trimmed = s.trim();
    parse_grouped(trimmed.strip_suffix(CURRENCY_SUFFIX).unwrap_or(trimmed))
}

/// Parses plain digits (`10000`) or comma-grouped thousands (`10,000`).
/// Only whitespace around the number is tolerated.
pub(crate) fn parse_grouped(s: &str) -> Option<u64> {
    let number = s.trim();
    let mut groups = number.split(',');
    let head = groups.next()?;

    let is_digits = |g: &str| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(head) {
        return None;
    }
    if number.contains(',') && head.len() > 3 {
        return None;
    }

    let mut digits = head.to_string();
    for group in groups {
        if group.len() != 3 || !is_digits(group) {
            return None;
        }
        digits.push_str(group);
    }
    digits.parse().ok()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_labels() {
        assert_eq!("10,000원".parse::<Price>().unwrap(), Price::new(10_000));
        assert_eq!("10000".parse::<Price>().unwrap(), Price::new(10_000));
        assert_eq!(" 1,234,567 원 ".parse::<Price>().unwrap(), Price::new(1_234_567));
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        for input in [
            "", "원", "abc", "-100", "+100", "10.5", "1e3", "1 0 0", "1,,0", "10,00", ",100",
            "1000,000", "1,000,",
        ] {
            assert!(
                matches!(input.parse::<Price>(), Err(PricingError::MalformedPrice(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_grouped_numbers() {
        assert_eq!(parse_grouped("0"), Some(0));
        assert_eq!(parse_grouped(" 2000 "), Some(2_000));
        assert_eq!(parse_grouped("2,000"), Some(2_000));
        assert_eq!(parse_grouped("12,345,678"), Some(12_345_678));
        assert_eq!(parse_grouped("2,000원"), None);
        assert_eq!(parse_grouped("2 000"), None);
    }

    #[test]
    fn test_label_groups_thousands() {
        assert_eq!(Price::new(0).label(), "0원");
        assert_eq!(Price::new(999).label(), "999원");
        assert_eq!(Price::new(5_000).label(), "5,000원");
        assert_eq!(Price::new(1_234_567).label(), "1,234,567원");
    }

    #[test]
    fn test_checked_sub_never_goes_negative() {
        assert_eq!(Price::new(100).checked_sub(40), Some(Price::new(60)));
        assert_eq!(Price::new(100).checked_sub(100), Some(Price::ZERO));
        assert_eq!(Price::new(100).checked_sub(101), None);
    }
}
