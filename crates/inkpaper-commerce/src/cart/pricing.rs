//! Cart pricing and shipping.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Flat shipping fee and the subtotal above which shipping is free.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Orders with a subtotal strictly above this ship free.
    pub free_threshold: Money,
    /// Fee charged otherwise.
    pub flat_rate: Money,
}

impl ShippingPolicy {
    pub const fn new(free_threshold: Money, flat_rate: Money) -> Self {
        Self {
            free_threshold,
            flat_rate,
        }
    }

    /// Shipping charged for a subtotal.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal > self.free_threshold {
            Money::zero()
        } else {
            self.flat_rate
        }
    }
}

impl Default for ShippingPolicy {
    /// Free above ₹999, otherwise ₹99.
    fn default() -> Self {
        Self::new(Money::new(999), Money::new(99))
    }
}

/// Cart pricing breakdown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping charge.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
}

impl CartPricing {
    pub fn new(subtotal: Money, policy: &ShippingPolicy) -> Self {
        let shipping = policy.shipping_for(subtotal);
        Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }

    /// Whether shipping is free.
    pub fn ships_free(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Shipping line as shown at checkout ("Free" or an amount).
    pub fn shipping_label(&self) -> String {
        if self.ships_free() {
            "Free".to_string()
        } else {
            self.shipping.display()
        }
    }
}
