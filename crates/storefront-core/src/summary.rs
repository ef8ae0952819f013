//! # Unit-Economics Summary
//!
//! Serializable result of [`crate::PriceNormalizer::summarize`], shaped for
//! product cards and API responses. TypeScript bindings are exported with
//! `ts-rs` so the storefront frontend reads the same field names.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Derived pricing figures for one product snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitEconomics {
    pub product_id: String,

    /// Option used as the pack-size axis, if one was found.
    pub quantity_option_id: Option<String>,

    /// Lowest per-unit price in minor units. `0` means no variant is priced.
    pub cheapest_unit_price: f64,

    /// `cheapest_unit_price` rounded half away from zero to a whole minor unit.
    pub cheapest_unit_price_rounded: Money,

    pub cheapest_variant_id: Option<String>,

    /// Variant to preselect: the single-unit pack.
    pub canonical_variant_id: Option<String>,

    /// Per-variant breakdown, in catalog order.
    pub variants: Vec<VariantUnitPrice>,
}

/// Pack size and per-unit price of one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VariantUnitPrice {
    pub variant_id: String,
    pub quantity: u64,
    /// Pack price as delivered by upstream pricing, fractions included.
    /// `None` when it was not a numeric amount.
    pub price: Option<f64>,
    pub unit_price: Option<f64>,
}
