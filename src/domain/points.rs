/// Hard ceiling on points redeemable in a single checkout, regardless of
/// how many points the wallet holds.
pub const MAX_REDEEMABLE_POINTS: u64 = 2_000;

/// Points a customer holds in their wallet.
///
/// Reported for display only; redeeming points reduces the payable price
/// but never debits the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointBalance {
    pub available: u64,
}

impl PointBalance {
    pub fn new(available: u64) -> Self {
        Self { available }
    }

    /// Whether a request falls under the per-transaction ceiling.
    pub fn within_ceiling(points: u64) -> bool {
        points <= MAX_REDEEMABLE_POINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_is_inclusive() {
        assert!(PointBalance::within_ceiling(0));
        assert!(PointBalance::within_ceiling(MAX_REDEEMABLE_POINTS));
        assert!(!PointBalance::within_ceiling(MAX_REDEEMABLE_POINTS + 1));
    }
}
