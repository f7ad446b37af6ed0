//! Catalog listing command.
//!
//! # Usage
//!
//! ```bash
//! vitrine catalog --category polo --sort price-high
//! vitrine catalog --search premium --json
//! ```

use tracing::info;

use vitrine_storefront::StorefrontConfig;
use vitrine_storefront::catalog::{Catalog, CategoryFilter, SortKey};
use vitrine_storefront::snapshot::ProductCard;

use crate::render;

/// Print the products matching the filters.
///
/// # Errors
///
/// Returns an error if stdout cannot be written or JSON encoding fails.
pub fn list(
    config: &StorefrontConfig,
    category: CategoryFilter,
    search: &str,
    sort: SortKey,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::seeded(config.currency);
    let products = catalog.list_products(category, search, sort);
    info!(%category, search, %sort, count = products.len(), "Listing catalog");

    let cards: Vec<ProductCard> = products
        .into_iter()
        .map(|product| ProductCard::new(product, false))
        .collect();

    if json {
        render::emit(&serde_json::to_string_pretty(&cards)?)?;
        return Ok(());
    }

    let mut text = match cards.len() {
        1 => "1 product found\n".to_string(),
        n => format!("{n} products found\n"),
    };
    for card in &cards {
        text.push_str(&render::product(card));
        text.push('\n');
    }
    render::emit(&text)?;
    Ok(())
}
