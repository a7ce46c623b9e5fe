use super::price::Price;
use serde::Serialize;
use uuid::Uuid;

/// Buyer details forwarded to the payment widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub mobile_phone: String,
}

/// Payload handed to the third-party payment widget to open its payment window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub order_id: Uuid,
    pub order_name: String,
    pub amount: Price,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_mobile_phone: String,
    pub success_url: String,
    pub fail_url: String,
}

impl PaymentRequest {
    pub fn new(order_name: &str, amount: Price, customer: &Customer, origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            order_id: Uuid::new_v4(),
            order_name: order_name.to_string(),
            amount,
            customer_name: customer.name.clone(),
            customer_email: customer.email.clone(),
            customer_mobile_phone: customer.mobile_phone.clone(),
            success_url: format!("{origin}/success"),
            fail_url: format!("{origin}/fail"),
        }
    }
}
