//! Product categories.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five fixed shop categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Pens")]
    Pens,
    #[serde(rename = "Notebooks")]
    Notebooks,
    #[serde(rename = "Art Supplies")]
    ArtSupplies,
    #[serde(rename = "Desk Accessories")]
    DeskAccessories,
    #[serde(rename = "Gifts")]
    Gifts,
}

impl Category {
    /// Every category, in shop-menu order.
    pub const ALL: [Category; 5] = [
        Category::Pens,
        Category::Notebooks,
        Category::ArtSupplies,
        Category::DeskAccessories,
        Category::Gifts,
    ];

    /// Display label. Text search matches against this.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pens => "Pens",
            Category::Notebooks => "Notebooks",
            Category::ArtSupplies => "Art Supplies",
            Category::DeskAccessories => "Desk Accessories",
            Category::Gifts => "Gifts",
        }
    }

    /// Parse a label, ignoring case and surrounding whitespace.
    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

/// A category menu selection: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategorySelection {
    #[default]
    All,
    Only(Category),
}

impl CategorySelection {
    /// Check whether a category passes this selection.
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(c) => *c == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategorySelection::All => "All",
            CategorySelection::Only(c) => c.label(),
        }
    }
}

impl From<Category> for CategorySelection {
    fn from(c: Category) -> Self {
        CategorySelection::Only(c)
    }
}

impl FromStr for CategorySelection {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategorySelection::All)
        } else {
            s.parse::<Category>().map(CategorySelection::Only)
        }
    }
}
