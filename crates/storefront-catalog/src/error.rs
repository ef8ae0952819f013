//! # Catalog Error Types
//!
//! Error types for snapshot loading and configuration.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / CoreError                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds source path and categorization      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  unit-price binary ← Logs the error, exits non-zero                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use storefront_core::CoreError;
use thiserror::Error;

/// Snapshot loading and configuration errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Snapshot file could not be read.
    ///
    /// ## When This Occurs
    /// - Path doesn't exist
    /// - File permissions issue
    /// - Stdin closed with an error
    #[error("Failed to read {source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    /// Snapshot is not valid JSON or doesn't look like a product.
    #[error("Failed to decode {source_name}: {error}")]
    Decode {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },

    /// One product of a list snapshot is malformed.
    ///
    /// `index` is the zero-based position in the list.
    #[error("Failed to decode product #{index} in {source_name}: {error}")]
    DecodeProduct {
        source_name: String,
        index: usize,
        #[source]
        error: serde_json::Error,
    },

    /// Summary could not be rendered as JSON.
    #[error("Failed to render report: {0}")]
    Render(#[source] serde_json::Error),

    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Normalizer rejected the configuration.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CatalogError {
    pub(crate) fn io(source_name: impl Into<String>, error: std::io::Error) -> Self {
        CatalogError::Io {
            source_name: source_name.into(),
            error,
        }
    }

    pub(crate) fn decode(source_name: impl Into<String>, error: serde_json::Error) -> Self {
        CatalogError::Decode {
            source_name: source_name.into(),
            error,
        }
    }

    pub(crate) fn decode_product(
        source_name: impl Into<String>,
        index: usize,
        error: serde_json::Error,
    ) -> Self {
        CatalogError::DecodeProduct {
            source_name: source_name.into(),
            index,
            error,
        }
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

/// Name used in error messages for a snapshot source.
pub(crate) fn source_name(path: Option<&PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "stdin".to_string(),
    }
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;
