//! # Domain Types
//!
//! Product snapshot types as delivered by the catalog API.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product Snapshot                                │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────────┐                    │
//! │  │    Product      │        │   ProductOption     │                    │
//! │  │  ─────────────  │ 1   *  │  ─────────────────  │                    │
//! │  │  id, title      │───────►│  id                 │                    │
//! │  │  options        │        │  title "Количество" │                    │
//! │  │  variants       │        │  kind (optional)    │                    │
//! │  └────────┬────────┘        └──────────▲──────────┘                    │
//! │           │ 1                          │ option_id                     │
//! │           ▼ *                          │                               │
//! │  ┌─────────────────┐        ┌──────────┴──────────┐                    │
//! │  │    Variant      │ 1   *  │  OptionSelection    │                    │
//! │  │  ─────────────  │───────►│  ─────────────────  │                    │
//! │  │  id             │        │  option_id          │                    │
//! │  │  options        │        │  value "4"          │                    │
//! │  │  calculated_    │        └─────────────────────┘                    │
//! │  │    price        │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Untrusted Upstream
//! Every collection defaults to empty and every scalar that the pricing
//! module may omit is optional. `calculated_amount` is kept as raw JSON so
//! a missing amount and a non-numeric amount both survive decoding.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Product
// =============================================================================

/// A catalog product with its options and purchasable variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,

    #[serde(default)]
    pub title: String,

    /// Axes of variation, in catalog order.
    #[serde(default)]
    pub options: Vec<ProductOption>,

    /// Purchasable variants, in catalog order. Order decides tie-breaks.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Creates a product with no options and no variants.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            options: Vec::new(),
            variants: Vec::new(),
        }
    }

    /// Appends an option.
    pub fn with_option(mut self, option: ProductOption) -> Self {
        self.options.push(option);
        self
    }

    /// Appends a variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }
}

// =============================================================================
// Product Option
// =============================================================================

/// What an option measures, when the catalog tags it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// Pack size: the selection value is a number of units.
    Quantity,
    /// Any other axis (color, size, flavour...).
    #[serde(other)]
    Other,
}

/// A named axis of variation on a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: String,

    /// Free-text label entered by a catalog manager.
    #[serde(default)]
    pub title: String,

    /// Explicit unit-of-measure tag. Preferred over title matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<OptionKind>,
}

impl ProductOption {
    /// Creates an untagged option; it can only be found by title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: None,
        }
    }

    /// Sets the explicit kind tag.
    pub fn with_kind(mut self, kind: OptionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Checks if the option is explicitly tagged as the quantity axis.
    #[inline]
    pub fn is_tagged_quantity(&self) -> bool {
        self.kind == Some(OptionKind::Quantity)
    }
}

// =============================================================================
// Option Selection
// =============================================================================

/// The value a variant takes along one option's axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSelection {
    pub option_id: String,

    /// Always a string, even when it looks like a number.
    #[serde(default)]
    pub value: String,
}

// =============================================================================
// Calculated Price
// =============================================================================

/// Price resolved for a variant by the upstream pricing module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatedPrice {
    /// Raw amount in minor units. Expected to be a JSON number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_amount: Option<Value>,
}

impl CalculatedPrice {
    /// Returns the amount exactly as delivered if it is a finite JSON number.
    ///
    /// Fractional amounts are kept; strings, booleans and null are non-numeric.
    pub fn amount(&self) -> Option<f64> {
        match self.calculated_amount.as_ref()? {
            Value::Number(n) => n.as_f64().filter(|amount| amount.is_finite()),
            _ => None,
        }
    }
}

// =============================================================================
// Variant
// =============================================================================

/// A purchasable configuration of a product (e.g. a pack of four).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,

    /// At most one selection per product option; not every option is covered.
    #[serde(default)]
    pub options: Vec<OptionSelection>,

    /// Absent when upstream pricing failed for this variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_price: Option<CalculatedPrice>,
}

impl Variant {
    /// Creates a variant with no selections and no price.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            calculated_price: None,
        }
    }

    /// Appends an option selection.
    pub fn with_selection(mut self, option_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(OptionSelection {
            option_id: option_id.into(),
            value: value.into(),
        });
        self
    }

    /// Sets a numeric price in minor units.
    pub fn with_price(self, amount: i64) -> Self {
        self.with_raw_price(Value::from(amount))
    }

    /// Sets the price to an arbitrary JSON value, numeric or not.
    pub fn with_raw_price(mut self, amount: Value) -> Self {
        self.calculated_price = Some(CalculatedPrice {
            calculated_amount: Some(amount),
        });
        self
    }

    /// Returns the variant's price if upstream produced a numeric amount.
    #[inline]
    pub fn price(&self) -> Option<f64> {
        self.calculated_price.as_ref().and_then(CalculatedPrice::amount)
    }

    /// Returns the selection for an option, if the variant has one.
    pub fn selection(&self, option_id: &str) -> Option<&OptionSelection> {
        self.options.iter().find(|s| s.option_id == option_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
