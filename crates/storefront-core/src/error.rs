//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Config validation failures                     │
//! │                                                                         │
//! │  storefront-catalog errors (separate crate)                            │
//! │  └── CatalogError     - Snapshot I/O and decoding failures             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CatalogError → CLI exit code      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing itself never returns an error: every degraded input has a
//! documented fallback. Only building a [`crate::PricingConfig`] can fail.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Title matching is enabled but there is nothing to match against.
    ///
    /// ## When This Occurs
    /// - `STOREFRONT_QUANTITY_MARKERS` set to an empty string
    /// - Every configured marker was blank after trimming
    #[error("Title matching is enabled but no quantity markers are configured")]
    NoQuantityMarkers,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
