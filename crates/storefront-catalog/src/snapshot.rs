//! # Product Snapshots
//!
//! Decodes product snapshots as the catalog API returns them.
//!
//! ## Accepted Shapes
//! ```text
//! {"product": {...}}          single-product response
//! {"products": [{...}, ...]}  list response (extra keys like "count" ignored)
//! [{...}, ...]                bare array
//! {...}                       bare product
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use storefront_core::Product;
use tracing::debug;

use crate::error::{source_name, CatalogError, CatalogResult};

/// Decodes every product contained in a JSON document.
///
/// The document shape is chosen from its top-level keys before any product
/// is decoded, so a bad product is reported with its own error (and its
/// position in a list) instead of a generic "no shape matched".
///
/// `source_name` only labels errors and logs.
pub fn decode_products<R: Read>(reader: R, source_name: &str) -> CatalogResult<Vec<Product>> {
    let document: Value =
        serde_json::from_reader(reader).map_err(|e| CatalogError::decode(source_name, e))?;

    let products = match document {
        Value::Object(mut envelope) if envelope.contains_key("product") => {
            vec![decode_one(take(&mut envelope, "product"), source_name)?]
        }
        Value::Object(mut envelope) if envelope.contains_key("products") => {
            let items: Vec<Value> = serde_json::from_value(take(&mut envelope, "products"))
                .map_err(|e| CatalogError::decode(source_name, e))?;
            decode_list(items, source_name)?
        }
        Value::Array(items) => decode_list(items, source_name)?,
        bare => vec![decode_one(bare, source_name)?],
    };

    debug!(source = %source_name, count = products.len(), "Decoded product snapshot");
    Ok(products)
}

fn take(envelope: &mut Map<String, Value>, key: &str) -> Value {
    envelope.remove(key).unwrap_or(Value::Null)
}

fn decode_one(value: Value, source_name: &str) -> CatalogResult<Product> {
    serde_json::from_value(value).map_err(|e| CatalogError::decode(source_name, e))
}

fn decode_list(items: Vec<Value>, source_name: &str) -> CatalogResult<Vec<Product>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|e| CatalogError::decode_product(source_name, index, e))
        })
        .collect()
}

/// Decodes products from a JSON string.
pub fn decode_str(json: &str) -> CatalogResult<Vec<Product>> {
    decode_products(json.as_bytes(), "input")
}

/// Reads and decodes a snapshot file.
pub fn load_file(path: &Path) -> CatalogResult<Vec<Product>> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| CatalogError::io(name.as_str(), e))?;
    decode_products(BufReader::new(file), &name)
}

/// Where a snapshot is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    Stdin,
    File(PathBuf),
}

impl SnapshotSource {
    /// `-` means stdin, anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            SnapshotSource::Stdin
        } else {
            SnapshotSource::File(PathBuf::from(arg))
        }
    }

    pub fn name(&self) -> String {
        match self {
            SnapshotSource::Stdin => source_name(None),
            SnapshotSource::File(path) => source_name(Some(path)),
        }
    }

    /// Reads and decodes the snapshot.
    pub fn load(&self) -> CatalogResult<Vec<Product>> {
        match self {
            SnapshotSource::Stdin => {
                let stdin = std::io::stdin();
                let lock = stdin.lock();
                decode_products(lock, &self.name())
            }
            SnapshotSource::File(path) => load_file(path),
        }
    }
}
