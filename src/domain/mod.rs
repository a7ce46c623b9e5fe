//! Domain layer: pricing value objects and the ports the checkout depends on.

pub mod coupon;
pub mod order;
pub mod payment;
pub mod points;
pub mod ports;
pub mod price;
pub mod session;
