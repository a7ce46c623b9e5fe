use crate::domain::order::ProductData;
use crate::domain::ports::ProductSource;
use crate::error::{PricingError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the product from a JSON document shaped like the product endpoint's
/// response: `{"productName": .., "quantity": .., "price": ..}`.
///
/// The file is read on every fetch, so edits are picked up by the next load.
#[derive(Debug, Clone)]
pub struct JsonFileProductSource {
    path: PathBuf,
}

impl JsonFileProductSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProductSource for JsonFileProductSource {
    async fn fetch_product(&self) -> Result<ProductData> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            PricingError::ProductUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
