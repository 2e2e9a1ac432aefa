//! System instruction for the stationery advisor.

use crate::error::AdvisorResult;
use inkpaper_commerce::catalog::{Catalog, Category, Product};
use inkpaper_commerce::{Money, ProductId};
use serde::Serialize;

/// The slice of a product the advisor is allowed to see.
#[derive(Debug, Serialize)]
struct CatalogEntry<'a> {
    id: &'a ProductId,
    name: &'a str,
    category: Category,
    price: Money,
    description: &'a str,
}

impl<'a> From<&'a Product> for CatalogEntry<'a> {
    fn from(p: &'a Product) -> Self {
        Self {
            id: &p.id,
            name: &p.name,
            category: p.category,
            price: p.price,
            description: &p.description,
        }
    }
}

/// Catalog rendered as compact JSON for embedding in the instruction.
pub fn catalog_json(catalog: &Catalog) -> AdvisorResult<String> {
    let entries: Vec<CatalogEntry<'_>> = catalog.products().iter().map(CatalogEntry::from).collect();
    Ok(serde_json::to_string(&entries)?)
}

/// Build the system instruction naming the assistant and store.
pub fn system_instruction(
    catalog: &Catalog,
    assistant_name: &str,
    store_name: &str,
) -> AdvisorResult<String> {
    let catalog = catalog_json(catalog)?;
    Ok(format!(
        "You are \"{assistant_name}\", a knowledgeable and friendly stationery expert assistant for the e-commerce store \"{store_name}\".\n\
         Your goal is to help customers find the perfect stationery products based on their needs, hobbies, or gift recipients.\n\
         \n\
         Here is the current product catalog (JSON format):\n\
         {catalog}\n\
         \n\
         Rules:\n\
         1. When recommending products, you MUST strictly use the products from the catalog provided.\n\
         2. The currency is INR (Indian Rupee), represented by '₹'. Always quote prices in INR.\n\
         3. Keep your tone warm, creative, and professional.\n\
         4. You can provide general stationery advice (e.g., how to clean a fountain pen) even if it doesn't lead to a sale.\n\
         5. If the user asks for something we don't have, politely suggest the closest alternative from our catalog.\n"
    ))
}

/// Opening line of every conversation.
pub fn welcome_message(assistant_name: &str) -> String {
    format!(
        "Hi there! I'm {assistant_name}, your personal stationery assistant. \
         Looking for the perfect pen or a gift for an artist? Ask away!"
    )
}
