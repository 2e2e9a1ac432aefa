//! Product catalog module.
//!
//! The catalog is loaded once and never changes afterwards. Clones share the
//! same product storage.

mod category;
mod product;
mod seed;

pub use category::{Category, CategorySelection};
pub use product::{Product, BESTSELLER_MIN_RATING, BESTSELLER_MIN_REVIEWS};

use crate::error::CommerceError;
use crate::ids::ProductId;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Number of products shown on the home page.
pub const FEATURED_COUNT: usize = 4;

/// An immutable, ordered product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Build a catalog, validating every record and rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }
        tracing::debug!(products = products.len(), "catalog loaded");
        Ok(Self {
            products: products.into(),
        })
    }

    /// The built-in Ink & Paper catalog.
    pub fn ink_and_paper() -> Self {
        Self {
            products: seed::products().into(),
        }
    }

    /// Parse a JSON array of product records.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Load a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// The first `n` products, as shown on the home page.
    pub fn featured(&self, n: usize) -> &[Product] {
        &self.products[..n.min(self.products.len())]
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::ink_and_paper()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_seed_catalog() {
        let catalog = Catalog::ink_and_paper();
        assert_eq!(catalog.len(), 12);
        let first = catalog.get(&ProductId::new("1")).unwrap();
        assert_eq!(first.price, Money::new(2960));
        assert!(Catalog::new(catalog.products().to_vec()).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let p = Product::new("1", "A", Money::new(10), Category::Pens);
        let err = Catalog::new(vec![p.clone(), p]).unwrap_err();
        assert!(matches!(err, CommerceError::DuplicateProduct(id) if id == "1"));
    }

    #[test]
    fn test_featured_is_prefix() {
        let catalog = Catalog::ink_and_paper();
        let featured = catalog.featured(FEATURED_COUNT);
        assert_eq!(featured.len(), 4);
        assert_eq!(featured, &catalog.products()[..4]);
        assert_eq!(catalog.featured(100).len(), 12);
    }

    #[test]
    fn test_from_json_rejects_bad_category() {
        let json = r#"[{"id":"x","name":"n","description":"","price":1,
            "category":"Stickers","image":"","rating":1.0,"reviews":0}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CommerceError::SerializationError(_))
        ));
    }

    #[test]
    fn test_clones_share_storage() {
        let a = Catalog::ink_and_paper();
        let b = a.clone();
        assert!(std::ptr::eq(a.products().as_ptr(), b.products().as_ptr()));
    }
}
