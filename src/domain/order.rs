use super::price::Price;
use crate::error::PricingError;
use serde::{Deserialize, Serialize};

/// Product payload as served by the product endpoint.
///
/// The price arrives as a display label (`"10,000원"`), not a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub product_name: String,
    pub quantity: String,
    pub price: String,
}

/// A single purchasable line item with a fixed, positive base price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    name: String,
    quantity: String,
    base_price: Price,
}

impl Order {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        base_price: Price,
    ) -> Result<Self, PricingError> {
        if base_price == Price::ZERO {
            return Err(PricingError::MalformedPrice(base_price.to_string()));
        }
        Ok(Self {
            name: name.into(),
            quantity: quantity.into(),
            base_price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn base_price(&self) -> Price {
        self.base_price
    }
}

impl TryFrom<ProductData> for Order {
    type Error = PricingError;

    fn try_from(data: ProductData) -> Result<Self, Self::Error> {
        let base_price: Price = data.price.parse()?;
        Order::new(data.product_name, data.quantity, base_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_from_product_data() {
        let json = r#"{"productName":"망고T","quantity":"1개","price":"10,000원"}"#;
        let data: ProductData = serde_json::from_str(json).unwrap();
        let order = Order::try_from(data).unwrap();

        assert_eq!(order.name(), "망고T");
        assert_eq!(order.quantity(), "1개");
        assert_eq!(order.base_price(), Price::new(10_000));
    }

    #[test]
    fn test_order_rejects_zero_price() {
        let data = ProductData {
            product_name: "free".to_string(),
            quantity: "1".to_string(),
            price: "0원".to_string(),
        };
        assert!(matches!(
            Order::try_from(data),
            Err(PricingError::MalformedPrice(_))
        ));
    }

    #[test]
    fn test_order_rejects_unparseable_price() {
        let data = ProductData {
            product_name: "tee".to_string(),
            quantity: "1".to_string(),
            price: "ten thousand".to_string(),
        };
        assert!(matches!(
            Order::try_from(data),
            Err(PricingError::MalformedPrice(_))
        ));
    }
}
