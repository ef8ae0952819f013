//! # storefront-catalog: Snapshot Loading for Unit Economics
//!
//! Everything storefront-core refuses to do: reading snapshot files, decoding
//! catalog API responses, loading configuration from the environment and
//! setting up logging.
//!
//! ## Modules
//!
//! - [`snapshot`] - Decode product snapshots from files or stdin
//! - [`config`] - `STOREFRONT_*` environment configuration
//! - [`report`] - Summaries for many products, rendered as JSON
//! - [`logging`] - `tracing` subscriber setup
//! - [`error`] - Catalog error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_catalog::{report, snapshot};
//! use storefront_core::PriceNormalizer;
//!
//! let products = snapshot::decode_str(r#"{"product": {
//!     "id": "p",
//!     "variants": [{ "id": "v", "calculated_price": { "calculated_amount": 1000 } }]
//! }}"#).unwrap();
//!
//! let summaries = report::summarize_all(&PriceNormalizer::default(), &products);
//! assert_eq!(summaries[0].cheapest_unit_price, 1000.0);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod snapshot;

pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult, ConfigError};
pub use snapshot::SnapshotSource;
