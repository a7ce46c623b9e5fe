use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid discount: {0}")]
    InvalidDiscount(String),
    #[error("Malformed coupon value: {0:?}")]
    MalformedCouponValue(String),
    #[error("Malformed price: {0:?}")]
    MalformedPrice(String),
    #[error("Malformed points value: {0:?}")]
    MalformedPoints(String),
    #[error("Order is not ready for pricing")]
    NotReady,
    #[error("Product unavailable: {0}")]
    ProductUnavailable(String),
}

pub type Result<T> = std::result::Result<T, PricingError>;
