use super::engine::PriceAdjustmentEngine;
use crate::domain::coupon::Coupon;
use crate::domain::order::Order;
use crate::domain::payment::{Customer, PaymentRequest};
use crate::domain::points::PointBalance;
use crate::domain::ports::{PointWallet, ProductSource};
use crate::domain::price::Price;
use crate::domain::session::PricingSession;
use crate::error::{PricingError, Result};
use serde::Serialize;
use tracing::{info, warn};

/// A user action on the checkout page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PricingAction {
    ApplyCoupon(Coupon),
    ApplyPoints(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutState {
    Loading,
    Ready {
        order: Order,
        session: PricingSession,
        points: PointBalance,
    },
    Failed {
        reason: String,
    },
}

/// Final state of a checkout, one record per run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSummary {
    pub product: String,
    pub quantity: String,
    pub base_price: Price,
    pub price_after_coupon: Price,
    pub points_input: u64,
    pub final_price: Price,
    pub available_points: u64,
}

/// One checkout page: loads its order, then runs pricing adjustments on it.
///
/// Pricing operations are only accepted once the order has loaded; until then
/// (or after a failed load) they fail with `NotReady`.
#[derive(Debug)]
pub struct Checkout {
    state: CheckoutState,
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkout {
    pub fn new() -> Self {
        Self {
            state: CheckoutState::Loading,
        }
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, CheckoutState::Ready { .. })
    }

    /// Fetches the order and wallet balance, moving to `Ready` or `Failed`.
    ///
    /// A checkout that is already ready keeps its session untouched.
    pub async fn load(
        &mut self,
        products: &dyn ProductSource,
        wallet: &dyn PointWallet,
    ) -> Result<()> {
        if self.is_ready() {
            return Ok(());
        }

        match Self::fetch(products, wallet).await {
            Ok((order, points)) => {
                info!(
                    product = order.name(),
                    base_price = %order.base_price(),
                    available_points = points.available,
                    "order ready"
                );
                let session = PricingSession::for_order(&order);
                self.state = CheckoutState::Ready {
                    order,
                    session,
                    points,
                };
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "order failed to load");
                self.state = CheckoutState::Failed {
                    reason: e.to_string(),
                };
                Err(e)
            }
        }
    }

    async fn fetch(
        products: &dyn ProductSource,
        wallet: &dyn PointWallet,
    ) -> Result<(Order, PointBalance)> {
        let data = products.fetch_product().await?;
        let order = Order::try_from(data)?;
        let points = wallet.balance().await?;
        Ok((order, points))
    }

    pub fn session(&self) -> Option<&PricingSession> {
        match &self.state {
            CheckoutState::Ready { session, .. } => Some(session),
            _ => None,
        }
    }

    pub fn apply_coupon(&mut self, coupon: &Coupon) -> Result<&PricingSession> {
        let session = self.session_mut()?;
        *session = PriceAdjustmentEngine::apply_coupon(session, coupon)?;
        Ok(&*session)
    }

    pub fn apply_points(&mut self, points: u64) -> Result<&PricingSession> {
        let session = self.session_mut()?;
        *session = PriceAdjustmentEngine::apply_points(session, points)?;
        Ok(&*session)
    }

    pub fn apply(&mut self, action: &PricingAction) -> Result<&PricingSession> {
        match action {
            PricingAction::ApplyCoupon(coupon) => self.apply_coupon(coupon),
            PricingAction::ApplyPoints(points) => self.apply_points(*points),
        }
    }

    fn session_mut(&mut self) -> Result<&mut PricingSession> {
        match &mut self.state {
            CheckoutState::Ready { session, .. } => Ok(session),
            _ => Err(PricingError::NotReady),
        }
    }

    pub fn summary(&self) -> Result<CheckoutSummary> {
        match &self.state {
            CheckoutState::Ready {
                order,
                session,
                points,
            } => Ok(CheckoutSummary {
                product: order.name().to_string(),
                quantity: order.quantity().to_string(),
                base_price: session.base_price,
                price_after_coupon: session.price_after_coupon,
                points_input: session.points_input,
                final_price: session.final_price,
                available_points: points.available,
            }),
            _ => Err(PricingError::NotReady),
        }
    }

    /// Builds the payment widget request for the current final price.
    pub fn payment_request(&self, customer: &Customer, origin: &str) -> Result<PaymentRequest> {
        match &self.state {
            CheckoutState::Ready { order, session, .. } => Ok(PaymentRequest::new(
                order.name(),
                session.final_price,
                customer,
                origin,
            )),
            _ => Err(PricingError::NotReady),
        }
    }
}
