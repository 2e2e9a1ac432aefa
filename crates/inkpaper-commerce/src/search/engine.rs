//! Filter criteria and the filter engine.

use crate::catalog::{Catalog, Category, CategorySelection, Product};
use crate::error::CommerceError;
use crate::search::Listing;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Curated product groupings reachable from the footer and home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialTag {
    New,
    Sale,
    Bestseller,
}

impl SpecialTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialTag::New => "new",
            SpecialTag::Sale => "sale",
            SpecialTag::Bestseller => "bestseller",
        }
    }

    /// Listing heading for this tag.
    pub fn title(&self) -> &'static str {
        match self {
            SpecialTag::New => "New Arrivals",
            SpecialTag::Sale => "On Sale",
            SpecialTag::Bestseller => "Best Sellers",
        }
    }

    /// Check whether a product carries this tag.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            SpecialTag::New => product.is_new,
            SpecialTag::Sale => product.is_sale,
            SpecialTag::Bestseller => product.is_bestseller(),
        }
    }
}

impl fmt::Display for SpecialTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecialTag {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(SpecialTag::New),
            "sale" => Ok(SpecialTag::Sale),
            "bestseller" | "bestsellers" => Ok(SpecialTag::Bestseller),
            _ => Err(CommerceError::UnknownSpecialTag(s.to_string())),
        }
    }
}

/// The single active filter criterion.
///
/// Search text, special tag and category are mutually exclusive; a value of
/// this type can only ever hold one of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FilterCriteria {
    /// No filter: the full catalog.
    #[default]
    All,
    /// Free-text search over name and category label.
    Text(String),
    /// Curated grouping.
    Special(SpecialTag),
    /// One category.
    Category(Category),
}

impl FilterCriteria {
    /// Text criterion. Blank queries collapse to [`FilterCriteria::All`].
    pub fn text(query: impl Into<String>) -> Self {
        let query = query.into();
        let trimmed = query.trim();
        if trimmed.is_empty() {
            FilterCriteria::All
        } else {
            FilterCriteria::Text(trimmed.to_string())
        }
    }

    /// Category criterion. Selecting "All" collapses to [`FilterCriteria::All`].
    pub fn category(selection: CategorySelection) -> Self {
        match selection {
            CategorySelection::All => FilterCriteria::All,
            CategorySelection::Only(c) => FilterCriteria::Category(c),
        }
    }

    pub fn special(tag: SpecialTag) -> Self {
        FilterCriteria::Special(tag)
    }

    /// Resolve loose criteria into one, by precedence: text, then special
    /// tag, then category.
    pub fn resolve(
        query: Option<&str>,
        special: Option<SpecialTag>,
        category: CategorySelection,
    ) -> Self {
        match (query.map(str::trim).filter(|q| !q.is_empty()), special) {
            (Some(q), _) => FilterCriteria::Text(q.to_string()),
            (None, Some(tag)) => FilterCriteria::Special(tag),
            (None, None) => FilterCriteria::category(category),
        }
    }

    /// Whether this criterion restricts the catalog at all.
    pub fn is_filtered(&self) -> bool {
        !matches!(self, FilterCriteria::All)
    }

    /// The search text, if this is a text criterion.
    pub fn query(&self) -> Option<&str> {
        match self {
            FilterCriteria::Text(q) => Some(q),
            _ => None,
        }
    }

    /// The category selection implied by this criterion.
    pub fn category_selection(&self) -> CategorySelection {
        match self {
            FilterCriteria::Category(c) => CategorySelection::Only(*c),
            _ => CategorySelection::All,
        }
    }

    /// The special tag, if this is a special criterion.
    pub fn special_tag(&self) -> Option<SpecialTag> {
        match self {
            FilterCriteria::Special(tag) => Some(*tag),
            _ => None,
        }
    }

    /// Build a predicate for this criterion.
    pub fn matcher(&self) -> impl Fn(&Product) -> bool + '_ {
        let needle = self.query().map(str::to_lowercase);
        move |product: &Product| match self {
            FilterCriteria::All => true,
            FilterCriteria::Text(_) => needle
                .as_deref()
                .map(|n| product.matches_text(n))
                .unwrap_or(true),
            FilterCriteria::Special(tag) => tag.matches(product),
            FilterCriteria::Category(c) => product.category == *c,
        }
    }

    /// Listing heading for this criterion.
    pub fn title(&self) -> String {
        match self {
            FilterCriteria::All => "Shop All".to_string(),
            FilterCriteria::Text(q) => format!("Search: \"{}\"", q),
            FilterCriteria::Special(tag) => tag.title().to_string(),
            FilterCriteria::Category(c) => c.label().to_string(),
        }
    }
}

/// Produce the visible subset of `catalog` for `criteria`, in catalog order.
///
/// Pure: the same inputs always give the same listing, and the catalog is
/// only read.
pub fn filter(catalog: &Catalog, criteria: &FilterCriteria) -> Listing {
    let matches = criteria.matcher();
    let products = catalog
        .products()
        .iter()
        .filter(|p| matches(p))
        .cloned()
        .collect();
    Listing::new(criteria.clone(), products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn ids(listing: &Listing) -> Vec<&str> {
        listing.products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_all_returns_catalog_in_order() {
        let catalog = Catalog::ink_and_paper();
        let listing = filter(&catalog, &FilterCriteria::All);
        assert_eq!(listing.products.as_slice(), catalog.products());
        assert!(!listing.is_filtered());
    }

    #[test]
    fn test_text_matches_name_case_insensitive() {
        let catalog = Catalog::ink_and_paper();
        let listing = filter(&catalog, &FilterCriteria::text("FOUNTAIN"));
        assert_eq!(ids(&listing), vec!["1", "5"]);
    }

    #[test]
    fn test_text_matches_category_label() {
        let catalog = Catalog::ink_and_paper();
        let listing = filter(&catalog, &FilterCriteria::text("art sup"));
        assert_eq!(ids(&listing), vec!["3", "6", "11", "12"]);
    }

    #[test]
    fn test_blank_text_is_no_filter() {
        assert_eq!(FilterCriteria::text("   "), FilterCriteria::All);
        assert_eq!(FilterCriteria::text("  ink "), FilterCriteria::Text("ink".into()));
    }

    #[test]
    fn test_bestseller_uses_or() {
        let catalog = Catalog::ink_and_paper();
        let listing = filter(&catalog, &FilterCriteria::special(SpecialTag::Bestseller));
        assert_eq!(ids(&listing), vec!["1", "2", "3", "6", "7", "8", "9", "10"]);
        for p in catalog.products() {
            let included = listing.products.iter().any(|l| l.id == p.id);
            assert_eq!(included, p.rating >= 4.8 || p.reviews > 1000, "{}", p.id);
        }
    }

    #[test]
    fn test_new_and_sale_flags() {
        let catalog = Catalog::ink_and_paper();
        assert_eq!(
            ids(&filter(&catalog, &FilterCriteria::special(SpecialTag::New))),
            vec!["2", "9"]
        );
        assert_eq!(
            ids(&filter(&catalog, &FilterCriteria::special(SpecialTag::Sale))),
            vec!["3", "11"]
        );
    }

    #[test]
    fn test_category() {
        let catalog = Catalog::ink_and_paper();
        let listing = filter(&catalog, &FilterCriteria::Category(Category::Notebooks));
        assert_eq!(ids(&listing), vec!["2", "7"]);
        assert_eq!(
            FilterCriteria::category(CategorySelection::All),
            FilterCriteria::All
        );
    }

    #[test]
    fn test_no_match_is_empty_but_filtered() {
        let catalog = Catalog::ink_and_paper();
        let listing = filter(&catalog, &FilterCriteria::text("typewriter"));
        assert!(listing.is_empty());
        assert!(listing.is_filtered());
    }

    #[test]
    fn test_resolve_precedence() {
        let pens = CategorySelection::Only(Category::Pens);
        assert_eq!(
            FilterCriteria::resolve(Some("ink"), Some(SpecialTag::Sale), pens),
            FilterCriteria::Text("ink".into())
        );
        assert_eq!(
            FilterCriteria::resolve(Some(""), Some(SpecialTag::Sale), pens),
            FilterCriteria::Special(SpecialTag::Sale)
        );
        assert_eq!(
            FilterCriteria::resolve(None, None, pens),
            FilterCriteria::Category(Category::Pens)
        );
        assert_eq!(
            FilterCriteria::resolve(None, None, CategorySelection::All),
            FilterCriteria::All
        );
    }

    #[test]
    fn test_every_listing_is_subset_of_catalog() {
        let catalog = Catalog::ink_and_paper();
        let mut criteria = vec![
            FilterCriteria::All,
            FilterCriteria::text("a"),
            FilterCriteria::text("zzz"),
            FilterCriteria::special(SpecialTag::New),
            FilterCriteria::special(SpecialTag::Sale),
            FilterCriteria::special(SpecialTag::Bestseller),
        ];
        criteria.extend(Category::ALL.into_iter().map(FilterCriteria::Category));

        for c in &criteria {
            let listing = filter(&catalog, c);
            let mut cursor = 0;
            for p in &listing.products {
                let pos = catalog.products()[cursor..]
                    .iter()
                    .position(|q| q == p)
                    .expect("listed product missing from catalog");
                cursor += pos + 1;
            }
            assert!(listing.products.iter().all(|p| catalog.get(&p.id).is_some()));
        }
        assert!(catalog.get(&ProductId::new("13")).is_none());
    }

    #[test]
    fn test_special_tag_parse() {
        assert_eq!("Bestsellers".parse::<SpecialTag>().unwrap(), SpecialTag::Bestseller);
        assert!("clearance".parse::<SpecialTag>().is_err());
    }
}
