//! Immutable views of storefront state for the presentation layer.

use crate::cart::{CartEntry, CartPricing};
use crate::catalog::Product;
use crate::search::{FilterCriteria, Listing};
use crate::storefront::View;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to render after an intent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    /// Current screen and payload.
    pub view: View,
    /// Active filter criterion.
    pub criteria: FilterCriteria,
    /// Products visible under the criterion.
    pub listing: Listing,
    /// Home-page product strip.
    pub featured: Vec<Product>,
    /// Cart contents and totals.
    pub cart: CartSnapshot,
    /// Whether the cart panel is open.
    pub cart_open: bool,
}

/// Cart contents and derived totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    pub entries: Vec<CartEntry>,
    pub pricing: CartPricing,
    /// Sum of quantities (header badge).
    pub item_count: u64,
    /// Distinct products (cart panel heading).
    pub entry_count: usize,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
