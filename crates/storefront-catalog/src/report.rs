//! Unit-economics report: one summary per product, rendered as JSON.

use storefront_core::{PriceNormalizer, Product, UnitEconomics};
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};

/// Summarizes every product, preserving input order.
pub fn summarize_all(normalizer: &PriceNormalizer, products: &[Product]) -> Vec<UnitEconomics> {
    let config = normalizer.config();
    debug!(
        markers = ?config.quantity_markers(),
        legacy_title_match = config.legacy_title_match(),
        "Summarizing products"
    );

    let summaries: Vec<UnitEconomics> = products.iter().map(|p| normalizer.summarize(p)).collect();

    let unpriced = summaries
        .iter()
        .filter(|s| s.cheapest_variant_id.is_none())
        .count();
    info!(
        products = summaries.len(),
        unpriced = unpriced,
        "Unit economics resolved"
    );

    summaries
}

/// Renders summaries as a JSON array.
pub fn render(summaries: &[UnitEconomics], pretty: bool) -> CatalogResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(summaries)
    } else {
        serde_json::to_string(summaries)
    };
    rendered.map_err(CatalogError::Render)
}
