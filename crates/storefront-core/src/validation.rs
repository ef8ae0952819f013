//! # Validation Module
//!
//! Validation for normalizer configuration values.
//!
//! Markers reach the normalizer from environment variables and admin
//! settings, so they are checked and normalized once, when a
//! [`crate::PricingConfig`] is built, rather than on every pricing call.

use crate::error::ValidationError;
use crate::MAX_MARKER_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a quantity marker and returns its normalized form.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must not be empty
/// - At most [`MAX_MARKER_LEN`] characters
/// - Returned lowercased, ready for case-insensitive matching
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_marker;
///
/// assert_eq!(validate_marker("  Количество ").unwrap(), "количество");
/// assert!(validate_marker("   ").is_err());
/// ```
pub fn validate_marker(marker: &str) -> ValidationResult<String> {
    let marker = marker.trim();

    if marker.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity marker".to_string(),
        });
    }

    if marker.chars().count() > MAX_MARKER_LEN {
        return Err(ValidationError::TooLong {
            field: "quantity marker".to_string(),
            max: MAX_MARKER_LEN,
        });
    }

    Ok(marker.to_lowercase())
}

/// Validates a list of markers, dropping duplicates after normalization.
///
/// Order is preserved; the first occurrence of each marker is kept.
pub fn validate_markers<I, S>(markers: I) -> ValidationResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for marker in markers {
        let marker = validate_marker(marker.as_ref())?;
        if !normalized.contains(&marker) {
            normalized.push(marker);
        }
    }
    Ok(normalized)
}

// =============================================================================
// Unit Tests
// =============================================================================
