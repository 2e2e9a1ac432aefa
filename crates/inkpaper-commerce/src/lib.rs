//! Storefront domain types and logic for Ink & Paper.
//!
//! This crate holds everything the storefront needs that is not presentation:
//!
//! - **Catalog**: Products, categories, the built-in seed catalog
//! - **Search**: Filter criteria and the filter engine that produces listings
//! - **Cart**: Cart entries, quantities and pricing
//! - **Checkout**: Checkout form validation and order confirmations
//! - **Storefront**: The view controller that turns intents into snapshots
//!
//! # Example
//!
//! ```rust
//! use inkpaper_commerce::prelude::*;
//!
//! let mut store = Storefront::new(Catalog::ink_and_paper());
//! store.dispatch(Intent::ShowSpecial(SpecialTag::Bestseller)).unwrap();
//! store.dispatch(Intent::AddToCart(ProductId::new("1"))).unwrap();
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.listing.title(), "Best Sellers");
//! assert_eq!(snapshot.cart.pricing.subtotal.amount(), 2960);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod search;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategorySelection, Product};

    // Cart
    pub use crate::cart::{Cart, CartEntry, CartPricing, ShippingPolicy};

    // Checkout
    pub use crate::checkout::{
        CheckoutForm, ContactDetails, OrderConfirmation, PaymentMethod, ShippingAddress,
    };

    // Search
    pub use crate::search::{filter, FilterCriteria, Listing, SpecialTag};

    // Storefront
    pub use crate::storefront::{
        CartSnapshot, FooterLink, Intent, Snapshot, Storefront, SupportTopic, View, ViewKind,
    };
}
