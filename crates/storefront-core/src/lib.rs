//! # storefront-core: Unit-Economics Resolution
//!
//! Products in the storefront are often sold in packs: the same item comes as
//! a single, a pair, a box of four. The pack size is not a typed field; it is
//! encoded as a product option (usually titled "Количество") whose value on
//! each variant is a numeric-looking string.
//!
//! This crate turns such a product snapshot into the numbers the storefront
//! shows ("from ₽800 per unit") and the variant it preselects.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Unit Economics                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Catalog API / product snapshot (JSON)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ storefront-catalog (decode, config)    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ quantity  │  │ normalizer │  │  summary  │  │   │
//! │  │   │  Product  │  │  option + │  │  cheapest  │  │   DTOs    │  │   │
//! │  │   │  Variant  │  │  parsing  │  │  canonical │  │  (ts-rs)  │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS • TOTAL                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product snapshot types (Product, ProductOption, Variant)
//! - [`money`] - Integer minor-unit money
//! - [`unit_price`] - Exact per-unit price comparison
//! - [`config`] - Normalizer configuration (quantity markers)
//! - [`quantity`] - Quantity option resolution and per-variant quantity
//! - [`normalizer`] - `PriceNormalizer`: cheapest and canonical variants
//! - [`summary`] - Serializable unit-economics summary
//! - [`error`] / [`validation`] - Config validation errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same snapshot in, same answer out
//! 2. **Total**: pricing never fails; degraded input falls back to documented defaults
//! 3. **No Early Rounding**: amounts are compared as delivered; only the
//!    displayed per-unit figure is rounded to whole minor units
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Product, ProductOption, Variant};
//!
//! let product = Product::new("prod_1", "Фильтр")
//!     .with_option(ProductOption::new("opt_qty", "Количество"))
//!     .with_variant(Variant::new("v1").with_selection("opt_qty", "1").with_price(1000))
//!     .with_variant(Variant::new("v2").with_selection("opt_qty", "2").with_price(1800))
//!     .with_variant(Variant::new("v4").with_selection("opt_qty", "4").with_price(3200));
//!
//! assert_eq!(storefront_core::cheapest_unit_price(&product), 800.0);
//! assert_eq!(storefront_core::cheapest_unit_variant(&product).unwrap().id, "v4");
//! assert_eq!(storefront_core::canonical_single_unit_variant(&product).unwrap().id, "v1");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod money;
pub mod normalizer;
pub mod quantity;
pub mod summary;
pub mod types;
pub mod unit_price;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::PricingConfig;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use normalizer::{
    canonical_single_unit_variant, cheapest_unit_price, cheapest_unit_variant, PriceNormalizer,
    UnitOffer,
};
pub use quantity::{parse_quantity, resolve_quantity_option, resolve_variant_quantity};
pub use summary::{UnitEconomics, VariantUnitPrice};
pub use types::*;
pub use unit_price::UnitPrice;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default title marker for the quantity option.
///
/// Catalog managers name the pack-size option "Количество" ("Quantity").
/// Matching is a case-insensitive substring test, so "Количество, шт" also
/// matches.
pub const DEFAULT_QUANTITY_MARKER: &str = "количество";

/// Longest marker accepted by [`PricingConfig`].
pub const MAX_MARKER_LEN: usize = 100;

/// Quantity used whenever a variant's pack size cannot be determined.
pub const FALLBACK_QUANTITY: u64 = 1;
