//! Catalog listing command.

use anyhow::Result;
use inkpaper_commerce::catalog::CategorySelection;
use inkpaper_commerce::search::{filter, FilterCriteria, SpecialTag};

use super::CatalogArgs;
use crate::context::Context;
use crate::render;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    let special = args
        .special
        .as_deref()
        .map(str::parse::<SpecialTag>)
        .transpose()?;
    let category = match args.category.as_deref() {
        Some(label) => label.parse::<CategorySelection>()?,
        None => CategorySelection::All,
    };
    let criteria = FilterCriteria::resolve(args.search.as_deref(), special, category);
    ctx.output.debug(&format!("Filtering {} products by {:?}", catalog.len(), criteria));

    let listing = filter(&catalog, &criteria);

    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return Ok(());
    }

    render::listing(&ctx.output, &listing);
    Ok(())
}
