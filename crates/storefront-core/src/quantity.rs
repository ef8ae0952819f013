//! # Quantity Resolution
//!
//! Finds the quantity option of a product and reads each variant's pack size.
//!
//! Both the cheapest-variant and canonical-variant resolvers go through
//! [`resolve_variant_quantity`], so every fallback below is applied the same
//! way everywhere.
//!
//! ## Fallbacks
//! ```text
//! ┌───────────────────────────────────────────────┬────────────┐
//! │ Condition                                     │ Quantity   │
//! ├───────────────────────────────────────────────┼────────────┤
//! │ product has no quantity option                │ 1          │
//! │ variant has no selection for that option      │ 1          │
//! │ value has no leading digits ("два", "")       │ 1          │
//! │ value parses to 0 or a negative number        │ 1          │
//! │ "4", " 4 ", "4 шт", "+4", "4.5"               │ 4          │
//! │ "5000000000"                                  │ 5000000000 │
//! │ digits beyond the u64 range                   │ u64::MAX   │
//! └───────────────────────────────────────────────┴────────────┘
//! ```

use tracing::{debug, trace};

use crate::config::PricingConfig;
use crate::types::{Product, ProductOption, Variant};
use crate::FALLBACK_QUANTITY;

/// Finds the option that encodes pack size.
///
/// An option tagged `kind = "quantity"` wins outright. Otherwise, if title
/// matching is enabled, the first untagged option (in catalog order) whose
/// title contains a configured marker is returned. An option tagged `other`
/// is never title-matched.
///
/// ## Example
/// ```rust
/// use storefront_core::{resolve_quantity_option, PricingConfig, Product, ProductOption};
///
/// let product = Product::new("p", "Фильтр")
///     .with_option(ProductOption::new("opt_color", "Цвет"))
///     .with_option(ProductOption::new("opt_qty", "Количество"));
///
/// let option = resolve_quantity_option(&product, &PricingConfig::default()).unwrap();
/// assert_eq!(option.id, "opt_qty");
/// ```
pub fn resolve_quantity_option<'a>(
    product: &'a Product,
    config: &PricingConfig,
) -> Option<&'a ProductOption> {
    if let Some(tagged) = product.options.iter().find(|o| o.is_tagged_quantity()) {
        trace!(product_id = %product.id, option_id = %tagged.id, "Quantity option found by kind tag");
        return Some(tagged);
    }

    let matched = product
        .options
        .iter()
        .find(|o| o.kind.is_none() && config.title_matches(&o.title));

    if let Some(option) = matched {
        trace!(
            product_id = %product.id,
            option_id = %option.id,
            title = %option.title,
            "Quantity option found by title"
        );
    }

    matched
}

/// Returns how many units a variant represents (always ≥ 1).
///
/// ## Example
/// ```rust
/// use storefront_core::{resolve_variant_quantity, ProductOption, Variant};
///
/// let qty = ProductOption::new("opt_qty", "Количество");
///
/// assert_eq!(resolve_variant_quantity(&Variant::new("a").with_selection("opt_qty", "4"), Some(&qty)), 4);
/// assert_eq!(resolve_variant_quantity(&Variant::new("f").with_selection("opt_qty", "5000000000"), Some(&qty)), 5_000_000_000);
/// assert_eq!(resolve_variant_quantity(&Variant::new("b").with_selection("opt_qty", "два"), Some(&qty)), 1);
/// assert_eq!(resolve_variant_quantity(&Variant::new("c").with_selection("opt_qty", "-1"), Some(&qty)), 1);
/// assert_eq!(resolve_variant_quantity(&Variant::new("d"), Some(&qty)), 1);
/// assert_eq!(resolve_variant_quantity(&Variant::new("e"), None), 1);
/// ```
pub fn resolve_variant_quantity(variant: &Variant, quantity_option: Option<&ProductOption>) -> u64 {
    let Some(option) = quantity_option else {
        return FALLBACK_QUANTITY;
    };

    let Some(selection) = variant.selection(&option.id) else {
        return FALLBACK_QUANTITY;
    };

    match parse_quantity(&selection.value) {
        Some(quantity) => quantity,
        None => {
            debug!(
                variant_id = %variant.id,
                value = %selection.value,
                "Unusable quantity value, treating variant as a single unit"
            );
            FALLBACK_QUANTITY
        }
    }
}

/// Parses the leading base-10 integer of a quantity value.
///
/// Leading whitespace and a sign are accepted, then the longest run of ASCII
/// digits is read; anything after it is ignored. Returns `None` when there are
/// no digits or the number is zero or negative. A run of digits too large for
/// `u64` saturates to `u64::MAX`: it is still a very large pack, never a single unit.
///
/// ## Example
/// ```rust
/// use storefront_core::parse_quantity;
///
/// assert_eq!(parse_quantity("12"), Some(12));
/// assert_eq!(parse_quantity("4 шт"), Some(4));
/// assert_eq!(parse_quantity("5000000000"), Some(5_000_000_000));
/// assert_eq!(parse_quantity("0"), None);
/// assert_eq!(parse_quantity("два"), None);
/// ```
pub fn parse_quantity(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() || negative {
        return None;
    }

    // digits only, so the sole parse failure is overflow
    match digits.parse::<u64>() {
        Ok(0) => None,
        Ok(quantity) => Some(quantity),
        Err(_) => Some(u64::MAX),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
