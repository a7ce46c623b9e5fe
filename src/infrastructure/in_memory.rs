use crate::domain::order::ProductData;
use crate::domain::points::{MAX_REDEEMABLE_POINTS, PointBalance};
use crate::domain::ports::{PointWallet, ProductSource};
use crate::error::{PricingError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Serves a single fixed product, mirroring the storefront's mock endpoint.
///
/// The product is shared behind an `Arc` so clones are cheap and can be handed
/// to several checkouts. A source built with [`InMemoryProductSource::failing`]
/// answers every fetch with `ProductUnavailable`.
#[derive(Clone)]
pub struct InMemoryProductSource {
    product: std::result::Result<Arc<ProductData>, String>,
}

impl Default for InMemoryProductSource {
    fn default() -> Self {
        Self::with_product(ProductData {
            product_name: "망고T".to_string(),
            quantity: "1개".to_string(),
            price: "10,000원".to_string(),
        })
    }
}

impl InMemoryProductSource {
    /// Creates a source serving the default mock product.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(product: ProductData) -> Self {
        Self {
            product: Ok(Arc::new(product)),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            product: Err(reason.into()),
        }
    }
}

#[async_trait]
impl ProductSource for InMemoryProductSource {
    async fn fetch_product(&self) -> Result<ProductData> {
        match &self.product {
            Ok(product) => Ok(product.as_ref().clone()),
            Err(reason) => Err(PricingError::ProductUnavailable(reason.clone())),
        }
    }
}

/// A wallet with a fixed balance. Redemptions never debit it.
#[derive(Clone, Copy)]
pub struct InMemoryPointWallet {
    balance: PointBalance,
}

impl Default for InMemoryPointWallet {
    fn default() -> Self {
        Self::with_balance(MAX_REDEEMABLE_POINTS)
    }
}

impl InMemoryPointWallet {
    /// Creates a wallet holding exactly the per-transaction ceiling.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(available: u64) -> Self {
        Self {
            balance: PointBalance::new(available),
        }
    }
}

#[async_trait]
impl PointWallet for InMemoryPointWallet {
    async fn balance(&self) -> Result<PointBalance> {
        Ok(self.balance)
    }
}
