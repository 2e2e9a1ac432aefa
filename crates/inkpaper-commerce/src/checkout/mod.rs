//! Checkout module.
//!
//! Contains the checkout form, its validation, and order confirmations.

mod address;
pub(crate) mod form;
mod order;

pub use address::{ContactDetails, ShippingAddress};
pub use form::{CheckoutForm, PaymentMethod};
pub use order::OrderConfirmation;
