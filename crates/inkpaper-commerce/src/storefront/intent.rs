//! User intents accepted by the storefront.

use crate::catalog::CategorySelection;
use crate::checkout::CheckoutForm;
use crate::ids::ProductId;
use crate::search::SpecialTag;
use crate::storefront::{FooterLink, SupportTopic};
use serde::{Deserialize, Serialize};

/// A discrete user action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "intent", content = "args", rename_all = "snake_case")]
pub enum Intent {
    /// Logo / "Continue Shopping": home, filters reset.
    Home,
    /// Header search box.
    Search(String),
    /// Header category menu or a home-page category tile.
    SelectCategory(CategorySelection),
    /// "View all" style links to a curated grouping.
    ShowSpecial(SpecialTag),
    /// A footer link.
    FooterLink(FooterLink),
    /// "Clear filters" on an empty listing.
    ClearFilters,
    /// Open a product's detail page.
    OpenProduct(ProductId),
    /// "Back to shop" from the detail page.
    BackToShop,
    OpenAccount,
    OpenSupport(SupportTopic),
    OpenCart,
    CloseCart,
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    /// Quantity buttons in the cart panel.
    AdjustQuantity { id: ProductId, delta: i64 },
    /// "Checkout" button in the cart panel.
    Checkout,
    /// Back arrow on the checkout page: home with the cart panel open.
    LeaveCheckout,
    /// Submit the checkout form.
    PlaceOrder(CheckoutForm),
}

impl Intent {
    /// Short name for logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Home => "home",
            Intent::Search(_) => "search",
            Intent::SelectCategory(_) => "select_category",
            Intent::ShowSpecial(_) => "show_special",
            Intent::FooterLink(_) => "footer_link",
            Intent::ClearFilters => "clear_filters",
            Intent::OpenProduct(_) => "open_product",
            Intent::BackToShop => "back_to_shop",
            Intent::OpenAccount => "open_account",
            Intent::OpenSupport(_) => "open_support",
            Intent::OpenCart => "open_cart",
            Intent::CloseCart => "close_cart",
            Intent::AddToCart(_) => "add_to_cart",
            Intent::RemoveFromCart(_) => "remove_from_cart",
            Intent::AdjustQuantity { .. } => "adjust_quantity",
            Intent::Checkout => "checkout",
            Intent::LeaveCheckout => "leave_checkout",
            Intent::PlaceOrder(_) => "place_order",
        }
    }
}
