//! Order confirmations.

use crate::cart::{CartEntry, CartPricing};
use crate::checkout::CheckoutForm;
use crate::ids::OrderNumber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the success screen shows after an order is placed.
///
/// Nothing is stored anywhere; this is the only record of the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Random confirmation number.
    pub number: OrderNumber,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// Email the confirmation is addressed to.
    pub email: String,
    /// Payment method label.
    pub payment: String,
    /// Purchased entries.
    pub entries: Vec<CartEntry>,
    /// Totals at placement time.
    pub pricing: CartPricing,
}

impl OrderConfirmation {
    pub fn new(
        number: OrderNumber,
        placed_at: DateTime<Utc>,
        form: &CheckoutForm,
        entries: Vec<CartEntry>,
        pricing: CartPricing,
    ) -> Self {
        Self {
            number,
            placed_at,
            email: form.contact.email.trim().to_string(),
            payment: form.payment.label().to_string(),
            entries,
            pricing,
        }
    }

    /// Units purchased.
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Confirmation message for the success screen.
    pub fn message(&self) -> String {
        format!(
            "Thank you for your purchase. We've sent a confirmation email to {}. Your order ID is {}.",
            self.email, self.number
        )
    }
}
