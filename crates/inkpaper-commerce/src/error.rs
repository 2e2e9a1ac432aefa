//! Commerce error types.

use thiserror::Error;

/// Errors that can occur while loading the catalog or applying storefront intents.
///
/// Rejected intents never leave partial state behind: the controller checks
/// everything before it mutates.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog records share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// Catalog record failed validation.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    /// Unknown category label.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unknown special tag.
    #[error("Unknown special tag: {0}")]
    UnknownSpecialTag(String),

    /// Unknown support topic.
    #[error("Unknown support topic: {0}")]
    UnknownSupportTopic(String),

    /// Intent not allowed from the current view.
    #[error("Invalid transition from {from} via {intent}")]
    InvalidTransition { from: String, intent: String },

    /// Order placement with nothing in the cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Catalog file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
