use super::order::ProductData;
use super::points::PointBalance;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_product(&self) -> Result<ProductData>;
}

#[async_trait]
pub trait PointWallet: Send + Sync {
    async fn balance(&self) -> Result<PointBalance>;
}

pub type ProductSourceBox = Box<dyn ProductSource>;
pub type PointWalletBox = Box<dyn PointWallet>;
