//! # Money Module
//!
//! Provides the `Money` type for whole amounts in the smallest currency unit
//! (kopecks for RUB, cents for USD).
//!
//! ## Where Money Is Used
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculated_amount (JSON number, may be fractional)                     │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  UnitPrice (exact amount / quantity)  ── compared, never rounded        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  UnitPrice::rounded() ──► Money  ← THIS MODULE                          │
//! │                           "от 800 ₽/шт" on the product card            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Upstream amounts are compared as delivered; `Money` only appears once a
//! per-unit price is rounded for display. Currency is never inspected.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A whole monetary value in minor units.
///
/// ## Design Decisions
/// - **i64 (signed)**: upstream amounts are not validated, negatives pass through
/// - **Transparent serde**: serializes as a bare integer, same as the catalog API
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_minor(129_900); // ₽1 299.00
    /// assert_eq!(price.minor(), 129_900);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
