//! # Pricing Configuration
//!
//! Controls how the normalizer finds the quantity option on a product.
//!
//! ## Resolution Order
//! ```text
//! product.options (catalog order)
//!      │
//!      ├── 1. first option tagged kind = "quantity"      (typed marker)
//!      │
//!      └── 2. first option whose lowercased title        (legacy fallback,
//!             contains any configured marker                 if enabled)
//! ```
//!
//! Title matching couples program logic to a label a catalog manager can
//! rename at any time. It stays on by default because existing catalog data
//! has no typed tags yet.

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_markers;
use crate::DEFAULT_QUANTITY_MARKER;

/// Normalizer configuration.
///
/// Fields are private: markers are stored lowercased and deduplicated, and
/// title matching is never enabled with an empty marker list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    quantity_markers: Vec<String>,
    legacy_title_match: bool,
}

impl PricingConfig {
    /// Builds a validated configuration.
    ///
    /// ## Errors
    /// - [`CoreError::Validation`] if any marker is blank or too long
    /// - [`CoreError::NoQuantityMarkers`] if title matching is on but no markers remain
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::PricingConfig;
    ///
    /// let config = PricingConfig::new(["Количество", "Quantity"], true).unwrap();
    /// assert_eq!(config.quantity_markers(), ["количество", "quantity"]);
    ///
    /// assert!(PricingConfig::new(Vec::<String>::new(), true).is_err());
    /// assert!(PricingConfig::new(Vec::<String>::new(), false).is_ok());
    /// ```
    pub fn new<I, S>(markers: I, legacy_title_match: bool) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let quantity_markers = validate_markers(markers)?;

        if legacy_title_match && quantity_markers.is_empty() {
            return Err(CoreError::NoQuantityMarkers);
        }

        Ok(Self {
            quantity_markers,
            legacy_title_match,
        })
    }

    /// Configuration that only trusts typed `kind` tags.
    pub fn typed_only() -> Self {
        Self {
            quantity_markers: Vec::new(),
            legacy_title_match: false,
        }
    }

    /// Normalized (lowercased) markers.
    pub fn quantity_markers(&self) -> &[String] {
        &self.quantity_markers
    }

    /// Whether options may be matched by title.
    pub fn legacy_title_match(&self) -> bool {
        self.legacy_title_match
    }

    /// Checks if an option title names the quantity axis.
    ///
    /// Always `false` when title matching is disabled.
    pub fn title_matches(&self, title: &str) -> bool {
        if !self.legacy_title_match {
            return false;
        }
        let folded = title.to_lowercase();
        self.quantity_markers
            .iter()
            .any(|marker| folded.contains(marker.as_str()))
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            quantity_markers: vec![DEFAULT_QUANTITY_MARKER.to_string()],
            legacy_title_match: true,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
