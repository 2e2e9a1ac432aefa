//! Filtered product listings.

use crate::catalog::Product;
use crate::search::FilterCriteria;
use serde::{Deserialize, Serialize};

/// The visible product subset for one criterion.
///
/// An empty listing is a valid result. `is_filtered` tells an empty search
/// apart from an empty catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    /// Criterion that produced this listing.
    pub criteria: FilterCriteria,
    /// Matching products, in catalog order.
    pub products: Vec<Product>,
}

impl Listing {
    pub fn new(criteria: FilterCriteria, products: Vec<Product>) -> Self {
        Self { criteria, products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Whether a criterion other than "All" is active.
    pub fn is_filtered(&self) -> bool {
        self.criteria.is_filtered()
    }

    /// Heading shown above the listing.
    pub fn title(&self) -> String {
        self.criteria.title()
    }

    /// Result count line, e.g. "3 products found".
    pub fn summary(&self) -> String {
        format!("{} products found", self.products.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::search::SpecialTag;

    #[test]
    fn test_titles() {
        let title = |c: FilterCriteria| Listing::new(c, Vec::new()).title();
        assert_eq!(title(FilterCriteria::All), "Shop All");
        assert_eq!(title(FilterCriteria::text("ink")), "Search: \"ink\"");
        assert_eq!(title(FilterCriteria::special(SpecialTag::New)), "New Arrivals");
        assert_eq!(title(FilterCriteria::special(SpecialTag::Sale)), "On Sale");
        assert_eq!(
            title(FilterCriteria::special(SpecialTag::Bestseller)),
            "Best Sellers"
        );
        assert_eq!(
            title(FilterCriteria::Category(Category::DeskAccessories)),
            "Desk Accessories"
        );
    }

    #[test]
    fn test_summary() {
        let listing = Listing::new(FilterCriteria::text("zzz"), Vec::new());
        assert_eq!(listing.summary(), "0 products found");
        assert!(listing.is_empty() && listing.is_filtered());
    }
}
