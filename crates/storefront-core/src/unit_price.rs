//! # Unit Price
//!
//! A pack price paired with the number of units in the pack.
//!
//! ## Ordering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  per_unit = amount / units        (amount as delivered, may be 12.6)   │
//! │                                                                         │
//! │  Upstream amounts are never rounded before comparison: rounding 13.4   │
//! │  and 12.6 to 13 would turn a clear winner into a tie.                  │
//! │                                                                         │
//! │  IEEE division is correctly rounded, so equal fractions stay equal:    │
//! │      1000 / 3  ==  2000 / 6                                            │
//! │  and the "first of equal prices wins" tie-break is stable.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding to whole minor units only happens for display ([`UnitPrice::rounded`]).

use std::cmp::Ordering;

use crate::money::Money;

/// Price of one unit, kept as the pair `total / units`.
#[derive(Debug, Clone, Copy)]
pub struct UnitPrice {
    total: f64,
    units: u64,
}

impl UnitPrice {
    /// Creates a unit price for a pack of `units` costing `total` minor units.
    ///
    /// `total` must be finite. A pack of zero units is treated as a single unit.
    #[inline]
    pub fn new(total: f64, units: u64) -> Self {
        debug_assert!(total.is_finite(), "unit price total must be finite");
        Self {
            // -0.0 + 0.0 is +0.0, so both zeros order as equal
            total: total + 0.0,
            units: units.max(1),
        }
    }

    /// Price of the whole pack.
    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of units in the pack (always ≥ 1).
    #[inline]
    pub fn units(&self) -> u64 {
        self.units
    }

    /// Per-unit price in minor units, possibly fractional.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::UnitPrice;
    ///
    /// assert_eq!(UnitPrice::new(1800.0, 2).per_unit(), 900.0);
    /// assert_eq!(UnitPrice::new(12.6, 1).per_unit(), 12.6);
    /// ```
    pub fn per_unit(&self) -> f64 {
        self.total / self.units as f64
    }

    /// Per-unit price rounded half away from zero to a whole minor unit.
    ///
    /// Values beyond the `i64` range saturate.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::UnitPrice;
    ///
    /// assert_eq!(UnitPrice::new(1000.0, 3).rounded().minor(), 333);
    /// assert_eq!(UnitPrice::new(1001.0, 2).rounded().minor(), 501);
    /// ```
    pub fn rounded(&self) -> Money {
        Money::from_minor(self.per_unit().round() as i64)
    }
}

impl PartialEq for UnitPrice {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for UnitPrice {}

impl PartialOrd for UnitPrice {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UnitPrice {
    fn cmp(&self, other: &Self) -> Ordering {
        self.per_unit().total_cmp(&other.per_unit())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
