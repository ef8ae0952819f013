//! Catalog tool configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                         | Default        | Meaning                              |
//! |----------------------------------|----------------|--------------------------------------|
//! | `STOREFRONT_QUANTITY_MARKERS`    | `количество`   | Comma-separated title markers        |
//! | `STOREFRONT_LEGACY_TITLE_MATCH`  | `true`         | Match the quantity option by title   |
//! | `STOREFRONT_PRETTY_JSON`         | `false`        | Indent the JSON report               |

use std::env;

use serde::{Deserialize, Serialize};
use storefront_core::{PricingConfig, DEFAULT_QUANTITY_MARKER};

use crate::error::{CatalogResult, ConfigError};

pub const ENV_QUANTITY_MARKERS: &str = "STOREFRONT_QUANTITY_MARKERS";
pub const ENV_LEGACY_TITLE_MATCH: &str = "STOREFRONT_LEGACY_TITLE_MATCH";
pub const ENV_PRETTY_JSON: &str = "STOREFRONT_PRETTY_JSON";

/// Catalog tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Raw markers; validated when the pricing config is built.
    pub quantity_markers: Vec<String>,

    pub legacy_title_match: bool,

    pub pretty_json: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            quantity_markers: vec![DEFAULT_QUANTITY_MARKER.to_string()],
            legacy_title_match: true,
            pretty_json: false,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let quantity_markers = match lookup(ENV_QUANTITY_MARKERS) {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|marker| !marker.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.quantity_markers,
        };

        let legacy_title_match = match lookup(ENV_LEGACY_TITLE_MATCH) {
            Some(raw) => parse_bool(ENV_LEGACY_TITLE_MATCH, &raw)?,
            None => defaults.legacy_title_match,
        };

        let pretty_json = match lookup(ENV_PRETTY_JSON) {
            Some(raw) => parse_bool(ENV_PRETTY_JSON, &raw)?,
            None => defaults.pretty_json,
        };

        Ok(Self {
            quantity_markers,
            legacy_title_match,
            pretty_json,
        })
    }

    /// Builds the validated normalizer configuration.
    pub fn pricing_config(&self) -> CatalogResult<PricingConfig> {
        Ok(PricingConfig::new(
            &self.quantity_markers,
            self.legacy_title_match,
        )?)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}
