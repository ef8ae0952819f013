//! # Price Normalizer
//!
//! Compares pack variants of a product on a per-unit basis.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product "Фильтр", option "Количество"                                 │
//! │                                                                         │
//! │    variant   qty   price    per unit                                   │
//! │    v1         1    1000     1000                                       │
//! │    v2         2    1800      900                                       │
//! │    v4         4    3200      800   ◄── cheapest_unit_variant          │
//! │                                                                         │
//! │  Product card:  "от 800 ₽/шт"      ◄── cheapest_unit_price            │
//! │  Preselected:   v1                 ◄── canonical_single_unit_variant  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tie-Break
//! Variants are scanned in catalog order and a later variant replaces the
//! current best only if its per-unit price is strictly lower. Among equal
//! per-unit prices the first variant wins.
//!
//! ## "No Price" Sentinel
//! [`PriceNormalizer::cheapest_unit_price`] returns `0.0` when no variant has
//! a usable price. Callers must read zero as "unknown", never as "free".

use tracing::{debug, trace};

use crate::config::PricingConfig;
use crate::quantity::{resolve_quantity_option, resolve_variant_quantity};
use crate::summary::{UnitEconomics, VariantUnitPrice};
use crate::types::{Product, ProductOption, Variant};
use crate::unit_price::UnitPrice;

// =============================================================================
// Unit Offer
// =============================================================================

/// A priced variant together with its pack size and per-unit price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitOffer<'a> {
    pub variant: &'a Variant,
    pub quantity: u64,
    pub unit_price: UnitPrice,
}

// =============================================================================
// Price Normalizer
// =============================================================================

/// Stateless resolver over product snapshots.
///
/// Holds only immutable configuration, so one instance can be shared across
/// request handlers.
#[derive(Debug, Clone, Default)]
pub struct PriceNormalizer {
    config: PricingConfig,
}

impl PriceNormalizer {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Configuration this normalizer resolves with.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Finds the product's quantity option. See [`resolve_quantity_option`].
    pub fn quantity_option<'a>(&self, product: &'a Product) -> Option<&'a ProductOption> {
        resolve_quantity_option(product, &self.config)
    }

    /// Finds the priced variant with the lowest per-unit price.
    ///
    /// Returns `None` if the product has no variant with a numeric price.
    pub fn cheapest_unit_offer<'a>(&self, product: &'a Product) -> Option<UnitOffer<'a>> {
        cheapest_among(&product.variants, self.quantity_option(product))
    }

    /// Lowest per-unit price across all variants, or `0.0` if none is priced.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{PriceNormalizer, Product, Variant};
    ///
    /// let normalizer = PriceNormalizer::default();
    /// let product = Product::new("p", "").with_variant(Variant::new("v").with_price(1000));
    ///
    /// assert_eq!(normalizer.cheapest_unit_price(&product), 1000.0);
    /// assert_eq!(normalizer.cheapest_unit_price(&Product::new("empty", "")), 0.0);
    /// ```
    pub fn cheapest_unit_price(&self, product: &Product) -> f64 {
        self.cheapest_unit_offer(product)
            .map(|offer| offer.unit_price.per_unit())
            .unwrap_or(0.0)
    }

    /// The variant achieving [`Self::cheapest_unit_price`].
    pub fn cheapest_unit_variant<'a>(&self, product: &'a Product) -> Option<&'a Variant> {
        self.cheapest_unit_offer(product).map(|offer| offer.variant)
    }

    /// The variant that represents exactly one unit, regardless of price.
    ///
    /// ## Rules
    /// 1. No variants → `None`
    /// 2. No quantity option → first variant
    /// 3. First variant whose quantity resolves to exactly 1
    /// 4. Otherwise the first variant
    pub fn canonical_single_unit_variant<'a>(&self, product: &'a Product) -> Option<&'a Variant> {
        canonical_among(&product.variants, self.quantity_option(product))
    }

    /// Everything a product card or API response needs, in one pass.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{PriceNormalizer, Product, ProductOption, Variant};
    ///
    /// let product = Product::new("p", "")
    ///     .with_option(ProductOption::new("q", "Количество"))
    ///     .with_variant(Variant::new("single").with_selection("q", "1").with_price(1000))
    ///     .with_variant(Variant::new("triple").with_selection("q", "3").with_price(2000));
    ///
    /// let summary = PriceNormalizer::default().summarize(&product);
    /// assert_eq!(summary.cheapest_variant_id.as_deref(), Some("triple"));
    /// assert_eq!(summary.cheapest_unit_price_rounded.minor(), 667);
    /// assert_eq!(summary.canonical_variant_id.as_deref(), Some("single"));
    /// ```
    pub fn summarize(&self, product: &Product) -> UnitEconomics {
        let option = self.quantity_option(product);
        let cheapest = cheapest_among(&product.variants, option);
        let canonical = canonical_among(&product.variants, option);

        let variants = product
            .variants
            .iter()
            .map(|variant| {
                let quantity = resolve_variant_quantity(variant, option);
                let price = variant.price();
                VariantUnitPrice {
                    variant_id: variant.id.clone(),
                    quantity,
                    price,
                    unit_price: price.map(|p| UnitPrice::new(p, quantity).per_unit()),
                }
            })
            .collect();

        let summary = UnitEconomics {
            product_id: product.id.clone(),
            quantity_option_id: option.map(|o| o.id.clone()),
            cheapest_unit_price: cheapest.map(|c| c.unit_price.per_unit()).unwrap_or(0.0),
            cheapest_unit_price_rounded: cheapest
                .map(|c| c.unit_price.rounded())
                .unwrap_or_default(),
            cheapest_variant_id: cheapest.map(|c| c.variant.id.clone()),
            canonical_variant_id: canonical.map(|v| v.id.clone()),
            variants,
        };

        debug!(
            product_id = %summary.product_id,
            cheapest_variant = ?summary.cheapest_variant_id,
            canonical_variant = ?summary.canonical_variant_id,
            unit_price = summary.cheapest_unit_price,
            "Resolved unit economics"
        );

        summary
    }
}

// =============================================================================
// Shared Resolvers
// =============================================================================

fn cheapest_among<'a>(
    variants: &'a [Variant],
    quantity_option: Option<&ProductOption>,
) -> Option<UnitOffer<'a>> {
    let mut best: Option<UnitOffer<'a>> = None;

    for variant in variants {
        let Some(price) = variant.price() else {
            trace!(variant_id = %variant.id, "Variant has no numeric price, skipped");
            continue;
        };

        let quantity = resolve_variant_quantity(variant, quantity_option);
        let unit_price = UnitPrice::new(price, quantity);

        // Strictly lower only: equal per-unit prices keep the earlier variant
        if best.map_or(true, |current| unit_price < current.unit_price) {
            best = Some(UnitOffer {
                variant,
                quantity,
                unit_price,
            });
        }
    }

    best
}

fn canonical_among<'a>(
    variants: &'a [Variant],
    quantity_option: Option<&ProductOption>,
) -> Option<&'a Variant> {
    let first = variants.first()?;

    let Some(option) = quantity_option else {
        return Some(first);
    };

    let single = variants
        .iter()
        .find(|variant| resolve_variant_quantity(variant, Some(option)) == 1);

    Some(single.unwrap_or(first))
}

// =============================================================================
// Free Functions (default configuration)
// =============================================================================

/// [`PriceNormalizer::cheapest_unit_price`] with the default configuration.
pub fn cheapest_unit_price(product: &Product) -> f64 {
    PriceNormalizer::default().cheapest_unit_price(product)
}

/// [`PriceNormalizer::cheapest_unit_variant`] with the default configuration.
pub fn cheapest_unit_variant(product: &Product) -> Option<&Variant> {
    PriceNormalizer::default().cheapest_unit_variant(product)
}

/// [`PriceNormalizer::canonical_single_unit_variant`] with the default configuration.
pub fn canonical_single_unit_variant(product: &Product) -> Option<&Variant> {
    PriceNormalizer::default().canonical_single_unit_variant(product)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::OptionKind;
    use serde_json::json;

    const QTY: &str = "opt_qty";

    fn pack(id: &str, qty: &str, price: i64) -> Variant {
        Variant::new(id).with_selection(QTY, qty).with_price(price)
    }

    fn with_quantity_option(title: &str) -> Product {
        Product::new("prod_1", "Фильтр").with_option(ProductOption::new(QTY, title))
    }

    fn ids(variant: Option<&Variant>) -> Option<&str> {
        variant.map(|v| v.id.as_str())
    }

    #[test]
    fn test_no_variants() {
        let product = with_quantity_option("Количество");
        assert_eq!(cheapest_unit_price(&product), 0.0);
        assert!(cheapest_unit_variant(&product).is_none());
        assert!(canonical_single_unit_variant(&product).is_none());
    }

    #[test]
    fn test_single_variant_without_quantity_option() {
        let product = Product::new("p", "Чайник").with_variant(Variant::new("only").with_price(1000));
        assert_eq!(cheapest_unit_price(&product), 1000.0);
        assert_eq!(ids(cheapest_unit_variant(&product)), Some("only"));
        assert_eq!(ids(canonical_single_unit_variant(&product)), Some("only"));
    }

    #[test]
    fn test_pack_sizes() {
        let product = with_quantity_option("Количество")
            .with_variant(pack("v1", "1", 1000))
            .with_variant(pack("v2", "2", 1800))
            .with_variant(pack("v4", "4", 3200));

        assert_eq!(cheapest_unit_price(&product), 800.0);
        assert_eq!(ids(cheapest_unit_variant(&product)), Some("v4"));
        assert_eq!(ids(canonical_single_unit_variant(&product)), Some("v1"));

        let summary = PriceNormalizer::default().summarize(&product);
        let per_unit: Vec<_> = summary.variants.iter().map(|v| v.unit_price).collect();
        assert_eq!(per_unit, vec![Some(1000.0), Some(900.0), Some(800.0)]);
    }

    #[test]
    fn test_canonical_ignores_price_ranking() {
        let product = with_quantity_option("Количество")
            .with_variant(pack("v4", "4", 3200))
            .with_variant(pack("v1", "1", 1000));
        assert_eq!(ids(canonical_single_unit_variant(&product)), Some("v1"));
        assert_eq!(ids(cheapest_unit_variant(&product)), Some("v4"));
    }

    #[test]
    fn test_tie_keeps_first_variant() {
        let product = with_quantity_option("Количество")
            .with_variant(pack("first", "2", 1000))
            .with_variant(pack("second", "1", 500))
            .with_variant(pack("third", "4", 2000));

        assert_eq!(cheapest_unit_price(&product), 500.0);
        assert_eq!(ids(cheapest_unit_variant(&product)), Some("first"));
    }

    #[test]
    fn test_tie_on_repeating_fraction_keeps_first() {
        let product = with_quantity_option("Количество")
            .with_variant(pack("a", "3", 1000))
            .with_variant(pack("b", "6", 2000));
        assert_eq!(ids(cheapest_unit_variant(&product)), Some("a"));
    }

    #[test]
    fn test_malformed_quantity_defaults_to_one() {
        let product = with_quantity_option("Количество")
            .with_variant(pack("words", "два", 900))
            .with_variant(pack("pair", "2", 2000));

        // "два" counts as a single unit: 900 per unit beats 1000 per unit
        assert_eq!(cheapest_unit_price(&product), 900.0);
        assert_eq!(ids(cheapest_unit_variant(&product)), Some("words"));
    }

    #[test]
    fn test_non_positive_quantity_clamps_to_one() {
        for value in ["0", "-1"] {
            let product = with_quantity_option("Количество").with_variant(pack("v", value, 700));
            let price = cheapest_unit_price(&product);
            assert_eq!(price, 700.0, "quantity {value:?}");
            assert!(price.is_finite());
        }
    }

    #[test]
    fn test_unpriced_variants_are_skipped() {
        let product = with_quantity_option("Количество")
            .with_variant(Variant::new("no_price").with_selection(QTY, "10"))
            .with_variant(
                Variant::new("text_price")
                    .with_selection(QTY, "10")
                    .with_raw_price(json!("100")),
            )
            .with_variant(pack("priced", "1", 1500));

        assert_eq!(cheapest_unit_price(&product), 1500.0);
        assert_eq!(ids(cheapest_unit_variant(&product)), Some("priced"));
    }

    #[test]
    fn test_all_variants_unpriced() {
        let product = with_quantity_option("Количество")
            .with_variant(Variant::new("a").with_selection(QTY, "1"))
            .with_variant(Variant::new("b").with_selection(QTY, "2"));

        assert_eq!(cheapest_unit_price(&product), 0.0);
        assert!(cheapest_unit_variant(&product).is_none());
        assert_eq!(ids(canonical_single_unit_variant(&product)), Some("a"));
    }

    #[test]
    fn test_canonical_prefers_unpriced_single_unit() {
        let product = with_quantity_option("Количество")
            .with_variant(pack("pair", "2", 1800))
            .with_variant(Variant::new("single").with_selection(QTY, "1"));
        assert_eq!(ids(canonical_single_unit_variant(&product)), Some("single"));
    }

    #[test]
    fn test_canonical_falls_back_to_first() {
        let product = with_quantity_option("Количество")
            .with_variant(pack("pair", "2", 1800))
            .with_variant(pack("quad", "4", 3200));
        assert_eq!(ids(canonical_single_unit_variant(&product)), Some("pair"));
    }

    #[test]
    fn test_canonical_counts_missing_selection_as_single() {
        let product = with_quantity_option("Количество")
            .with_variant(pack("pair", "2", 1800))
            .with_variant(Variant::new("bare").with_price(1000));
        assert_eq!(ids(canonical_single_unit_variant(&product)), Some("bare"));
    }

    #[test]
    fn test_canonical_without_quantity_option_is_first() {
        let product = with_quantity_option("Цвет")
            .with_variant(pack("red", "2", 1800))
            .with_variant(pack("blue", "1", 1000));
        assert_eq!(ids(canonical_single_unit_variant(&product)), Some("red"));
        // Without a quantity option "2" is just a colour value
        assert_eq!(ids(cheapest_unit_variant(&product)), Some("blue"));
    }

    #[test]
    fn test_typed_only_config() {
        let product = Product::new("p", "")
            .with_option(ProductOption::new(QTY, "Количество"))
            .with_variant(pack("v1", "1", 1000))
            .with_variant(pack("v4", "4", 3200));

        let typed = PriceNormalizer::new(PricingConfig::typed_only());
        assert_eq!(typed.config(), &PricingConfig::typed_only());
        assert!(!typed.config().legacy_title_match());
        assert_eq!(typed.cheapest_unit_price(&product), 1000.0);

        let mut tagged = product.clone();
        tagged.options[0].kind = Some(OptionKind::Quantity);
        assert_eq!(typed.cheapest_unit_price(&tagged), 800.0);
    }

    #[test]
    fn test_english_marker() {
        let product = with_quantity_option("Pack Quantity")
            .with_variant(pack("v1", "1", 1000))
            .with_variant(pack("v2", "2", 1800));

        assert_eq!(cheapest_unit_price(&product), 1000.0);

        let config = PricingConfig::new(["количество", "quantity"], true).unwrap();
        let normalizer = PriceNormalizer::new(config);
        assert_eq!(normalizer.cheapest_unit_price(&product), 900.0);
    }

    #[test]
    fn test_cheapest_unit_offer_details() {
        let product = with_quantity_option("Количество")
            .with_variant(pack("v1", "1", 1000))
            .with_variant(pack("v3", "3", 2000));

        let offer = PriceNormalizer::default().cheapest_unit_offer(&product).unwrap();
        assert_eq!(offer.variant.id, "v3");
        assert_eq!(offer.quantity, 3);
        assert_eq!(offer.unit_price.total(), 2000.0);
        assert_eq!(offer.unit_price.rounded(), Money::from_minor(667));
    }

    #[test]
    fn test_fractional_amounts_compared_as_delivered() {
        let product = Product::new("p", "")
            .with_variant(Variant::new("a").with_raw_price(json!(13.4)))
            .with_variant(Variant::new("b").with_raw_price(json!(12.6)));

        assert_eq!(cheapest_unit_price(&product), 12.6);
        assert_eq!(ids(cheapest_unit_variant(&product)), Some("b"));

        let summary = PriceNormalizer::default().summarize(&product);
        assert_eq!(summary.cheapest_unit_price, 12.6);
        assert_eq!(summary.cheapest_unit_price_rounded, Money::from_minor(13));
        assert_eq!(summary.variants[0].price, Some(13.4));
    }

    #[test]
    fn test_fractional_pack_price_per_unit() {
        let product = with_quantity_option("Количество")
            .with_variant(
                Variant::new("pair")
                    .with_selection(QTY, "2")
                    .with_raw_price(json!(25.0)),
            )
            .with_variant(
                Variant::new("single")
                    .with_selection(QTY, "1")
                    .with_raw_price(json!(12.49)),
            );

        assert_eq!(cheapest_unit_price(&product), 12.49);
        assert_eq!(ids(cheapest_unit_variant(&product)), Some("single"));
    }

    #[test]
    fn test_bulk_pack_beyond_u32_divides_by_full_quantity() {
        let product = with_quantity_option("Количество")
            .with_variant(pack("single", "1", 1000))
            .with_variant(pack("bulk", "5000000000", 10_000_000_000));

        let offer = PriceNormalizer::default().cheapest_unit_offer(&product).unwrap();
        assert_eq!(offer.variant.id, "bulk");
        assert_eq!(offer.quantity, 5_000_000_000);
        assert_eq!(offer.unit_price.per_unit(), 2.0);

        let summary = PriceNormalizer::default().summarize(&product);
        assert_eq!(summary.variants[1].quantity, 5_000_000_000);
        assert_eq!(summary.canonical_variant_id.as_deref(), Some("single"));
    }

    #[test]
    fn test_summary_of_empty_product() {
        let summary = PriceNormalizer::default().summarize(&Product::new("empty", ""));
        assert_eq!(summary.product_id, "empty");
        assert_eq!(summary.quantity_option_id, None);
        assert_eq!(summary.cheapest_unit_price, 0.0);
        assert_eq!(summary.cheapest_unit_price_rounded, Money::zero());
        assert_eq!(summary.cheapest_variant_id, None);
        assert_eq!(summary.canonical_variant_id, None);
        assert!(summary.variants.is_empty());
    }

    #[test]
    fn test_summary_rows() {
        let product = with_quantity_option("Количество")
            .with_variant(pack("v2", "2", 1800))
            .with_variant(Variant::new("unpriced").with_selection(QTY, "0"));

        let summary = PriceNormalizer::default().summarize(&product);
        assert_eq!(summary.quantity_option_id.as_deref(), Some(QTY));
        assert_eq!(
            summary.variants[0],
            VariantUnitPrice {
                variant_id: "v2".to_string(),
                quantity: 2,
                price: Some(1800.0),
                unit_price: Some(900.0),
            }
        );
        assert_eq!(
            summary.variants[1],
            VariantUnitPrice {
                variant_id: "unpriced".to_string(),
                quantity: 1,
                price: None,
                unit_price: None,
            }
        );
        assert_eq!(summary.canonical_variant_id.as_deref(), Some("unpriced"));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let product = with_quantity_option("Количество")
            .with_variant(pack("v1", "1", 1000))
            .with_variant(pack("v2", "2", 1800));
        let normalizer = PriceNormalizer::default();

        assert_eq!(normalizer.summarize(&product), normalizer.summarize(&product));
        assert_eq!(
            normalizer.cheapest_unit_price(&product),
            normalizer.cheapest_unit_price(&product)
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_variant() -> impl Strategy<Value = Variant> {
            (
                "[a-z]{1,6}",
                prop_oneof![
                    Just(None),
                    "-?[0-9]{1,4}".prop_map(Some),
                    "[0-9]{10,25}".prop_map(Some),
                    "[а-я ]{0,5}".prop_map(Some),
                ],
                prop_oneof![
                    Just(None),
                    (-100_000i64..100_000).prop_map(|p| Some(json!(p))),
                    (-1_000.0f64..1_000.0).prop_map(|p| Some(json!(p))),
                    Just(Some(json!("n/a"))),
                ],
            )
                .prop_map(|(id, qty, price)| {
                    let mut variant = Variant::new(id);
                    if let Some(qty) = qty {
                        variant = variant.with_selection(QTY, qty);
                    }
                    if let Some(price) = price {
                        variant = variant.with_raw_price(price);
                    }
                    variant
                })
        }

        fn arb_product() -> impl Strategy<Value = Product> {
            (any::<bool>(), prop::collection::vec(arb_variant(), 0..8)).prop_map(
                |(has_option, variants)| {
                    let mut product = Product::new("prop", "");
                    if has_option {
                        product = product.with_option(ProductOption::new(QTY, "Количество"));
                    }
                    product.variants = variants;
                    product
                },
            )
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: quantities are always positive and per-unit prices finite.
            #[test]
            fn quantities_positive_and_prices_finite(product in arb_product()) {
                let summary = PriceNormalizer::default().summarize(&product);
                prop_assert!(summary.cheapest_unit_price.is_finite());
                for row in &summary.variants {
                    prop_assert!(row.quantity >= 1);
                    if let Some(unit_price) = row.unit_price {
                        prop_assert!(unit_price.is_finite());
                    }
                }
            }

            /// Property: the cheapest variant is priced and no priced variant beats it.
            #[test]
            fn cheapest_is_minimal_and_first(product in arb_product()) {
                let normalizer = PriceNormalizer::default();
                let option = normalizer.quantity_option(&product);
                let Some(best) = normalizer.cheapest_unit_offer(&product) else {
                    prop_assert!(product.variants.iter().all(|v| v.price().is_none()));
                    return Ok(());
                };

                let best_index = product
                    .variants
                    .iter()
                    .position(|v| std::ptr::eq(v, best.variant))
                    .unwrap();

                for (index, variant) in product.variants.iter().enumerate() {
                    let Some(price) = variant.price() else { continue };
                    let unit = UnitPrice::new(price, resolve_variant_quantity(variant, option));
                    prop_assert!(unit >= best.unit_price);
                    if index < best_index {
                        prop_assert!(unit > best.unit_price);
                    }
                }
            }

            /// Property: canonical selection exists exactly when variants exist.
            #[test]
            fn canonical_exists_iff_variants(product in arb_product()) {
                let canonical = canonical_single_unit_variant(&product);
                prop_assert_eq!(canonical.is_some(), !product.variants.is_empty());
            }

            /// Property: resolution is a pure function of the snapshot.
            #[test]
            fn summarize_is_idempotent(product in arb_product()) {
                let normalizer = PriceNormalizer::default();
                let snapshot = product.clone();
                prop_assert_eq!(normalizer.summarize(&product), normalizer.summarize(&product));
                prop_assert_eq!(product, snapshot);
            }
        }
    }
}
