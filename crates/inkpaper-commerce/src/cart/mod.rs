//! Shopping cart module.
//!
//! Contains the cart aggregator, its entries and pricing.

mod cart;
mod pricing;

pub use cart::{Cart, CartEntry, MIN_QUANTITY};
pub use pricing::{CartPricing, ShippingPolicy};
