//! Cart and cart entry types.

use crate::cart::{CartPricing, ShippingPolicy};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Smallest quantity an entry can hold.
pub const MIN_QUANTITY: u32 = 1;

/// A shopping cart: ordered entries, at most one per product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// An existing entry gains one unit; otherwise a new entry with quantity 1
    /// is appended. Returns the entry's new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.entries.push(CartEntry::new(product.clone()));
        MIN_QUANTITY
    }

    /// Remove the entry for a product. Unknown ids are ignored.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| &e.product.id != id);
        self.entries.len() < len_before
    }

    /// Shift an entry's quantity by `delta`, never below 1.
    ///
    /// Returns the new quantity, or None when the product is not in the cart.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> Option<u32> {
        let entry = self.entries.iter_mut().find(|e| &e.product.id == id)?;
        let target = i64::from(entry.quantity).saturating_add(delta);
        entry.quantity = target.clamp(i64::from(MIN_QUANTITY), i64::from(u32::MAX)) as u32;
        Some(entry.quantity)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Get an entry by product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.product.id == id)
    }

    /// Sum of price times quantity over all entries.
    pub fn subtotal(&self) -> Money {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Total number of units (sum of quantities), used for the header badge.
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Number of distinct products.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Subtotal, shipping and total under a shipping policy.
    pub fn pricing(&self, policy: &ShippingPolicy) -> CartPricing {
        CartPricing::new(self.subtotal(), policy)
    }
}

/// One product and how many of it are in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// The product, as it was when added.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartEntry {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: MIN_QUANTITY,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * u64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn product(id: &str, price: u64) -> Product {
        Product::new(id, format!("Product {}", id), Money::new(price), Category::Pens)
    }

    #[test]
    fn test_add_new_entry() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(&product("1", 2960)), 1);
        assert_eq!(cart.entry_count(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = Cart::new();
        let p1 = product("1", 2960);
        cart.add(&p1);
        assert_eq!(cart.add(&p1), 2);

        assert_eq!(cart.entry_count(), 1);
        assert_eq!(cart.get(&p1.id).unwrap().quantity, 2);
        assert_eq!(cart.subtotal(), Money::new(5920));
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product("b", 1));
        cart.add(&product("a", 1));
        cart.add(&product("b", 1));
        let order: Vec<_> = cart.entries().iter().map(|e| e.product.id.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
    }

    #[test]
    fn test_update_quantity_floors_at_one() {
        let mut cart = Cart::new();
        let p = product("1", 100);
        cart.add(&p);
        cart.update_quantity(&p.id, 2);
        assert_eq!(cart.get(&p.id).unwrap().quantity, 3);

        assert_eq!(cart.update_quantity(&p.id, -100), Some(1));
        assert_eq!(cart.update_quantity(&p.id, -1), Some(1));
        assert_eq!(cart.entry_count(), 1);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product("1", 100));
        let before = cart.clone();
        assert_eq!(cart.update_quantity(&ProductId::new("nope"), 5), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        let p = product("1", 100);
        cart.add(&p);
        cart.add(&product("2", 100));

        let before = cart.clone();
        assert!(!cart.remove(&ProductId::new("nonexistent-id")));
        assert_eq!(cart, before);

        assert!(cart.remove(&p.id));
        assert_eq!(cart.entry_count(), 1);
        assert!(cart.get(&p.id).is_none());
    }

    #[test]
    fn test_subtotal_and_counts() {
        let mut cart = Cart::new();
        let a = product("a", 1000);
        let b = product("b", 2000);
        let free = product("free", 0);
        cart.add(&a);
        cart.add(&a);
        cart.add(&b);
        cart.add(&free);

        assert_eq!(cart.subtotal(), Money::new(4000));
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.entry_count(), 3);
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
        assert_eq!(cart.item_count(), 0);
    }
}
