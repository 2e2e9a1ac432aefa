//! Product records.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Minimum rating that makes a product a best seller.
pub const BESTSELLER_MIN_RATING: f64 = 4.8;

/// Review count a product must exceed to be a best seller.
pub const BESTSELLER_MIN_REVIEWS: u32 = 1000;

/// A product in the catalog. Immutable once the catalog is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Price in whole rupees.
    pub price: Money,
    /// Shop category.
    pub category: Category,
    /// Image URL.
    pub image: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// Shown under "New Arrivals".
    #[serde(default)]
    pub is_new: bool,
    /// Shown under "On Sale".
    #[serde(default)]
    pub is_sale: bool,
}

impl Product {
    /// Create a product with no rating, reviews or flags.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            category,
            image: String::new(),
            rating: 0.0,
            reviews: 0,
            is_new: false,
            is_sale: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set rating and review count.
    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    /// Mark as a new arrival.
    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Mark as on sale.
    pub fn on_sale(mut self) -> Self {
        self.is_sale = true;
        self
    }

    /// Best seller: highly rated OR heavily reviewed. Derived, never stored.
    pub fn is_bestseller(&self) -> bool {
        self.rating >= BESTSELLER_MIN_RATING || self.reviews > BESTSELLER_MIN_REVIEWS
    }

    /// Case-insensitive substring match on name or category label.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.label().to_lowercase().contains(needle)
    }

    /// Check the record is usable as catalog data.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.id.as_str().trim().is_empty() {
            return Err(CommerceError::InvalidProduct {
                id: self.id.to_string(),
                reason: "empty id".to_string(),
            });
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(CommerceError::InvalidProduct {
                id: self.id.to_string(),
                reason: format!("rating {} outside 0.0..=5.0", self.rating),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Product {
        Product::new("p", "Lamy Safari", Money::new(2960), Category::Pens)
    }

    #[test]
    fn test_bestseller_by_rating() {
        assert!(pen().with_rating(4.8, 10).is_bestseller());
        assert!(!pen().with_rating(4.7, 10).is_bestseller());
    }

    #[test]
    fn test_bestseller_by_reviews() {
        assert!(pen().with_rating(4.0, 1001).is_bestseller());
        // Exactly 1000 reviews is not enough.
        assert!(!pen().with_rating(4.0, 1000).is_bestseller());
    }

    #[test]
    fn test_matches_text() {
        let p = pen();
        assert!(p.matches_text("safari"));
        assert!(p.matches_text("pens"));
        assert!(!p.matches_text("notebook"));
    }

    #[test]
    fn test_validate_rating_range() {
        assert!(pen().with_rating(5.0, 0).validate().is_ok());
        assert!(pen().with_rating(5.1, 0).validate().is_err());
        assert!(pen().with_rating(-0.1, 0).validate().is_err());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "9", "name": "Gift Box", "description": "d", "price": 6500,
            "category": "Gifts", "image": "img", "rating": 4.9, "reviews": 45, "isNew": true
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.is_new);
        assert!(!p.is_sale);
        assert_eq!(p.price, Money::new(6500));
        assert_eq!(p.category, Category::Gifts);
    }
}
