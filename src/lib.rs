//! Skukey - canonical cache keys for SKU coordinates
//!
//! A SKU is identified by a coordinate: a scope, a product code and a set of
//! dimensions (color, size, region, ...). Skukey derives one stable string key
//! from a coordinate no matter what order its dimensions were inserted in.
//!
//! # Quick Start
//!
//! ```
//! use skukey::{Coordinate, InMemoryCatalog, SkuResolver};
//!
//! let coord = Coordinate::new("US", "P1")
//!     .with_dimension("size", "M")
//!     .with_dimension("color", "red");
//!
//! // Same key whichever order the dimensions arrive in
//! let same = Coordinate::new("US", "P1")
//!     .with_dimension("color", "red")
//!     .with_dimension("size", "M");
//! assert_eq!(coord.cache_key(), same.cache_key());
//!
//! // Resolve through any backend implementing the lookup contract
//! let catalog = InMemoryCatalog::new();
//! let sku = catalog.register(coord).unwrap();
//! assert_eq!(catalog.resolve(&same).unwrap().id(), sku.id());
//! ```
//!
//! # Architecture
//!
//! - `skukey-core`: value types, key derivation and the [`SkuResolver`] contract
//! - `skukey-storage`: [`InMemoryCatalog`], a reference resolver

pub use skukey_core::*;
pub use skukey_storage::{CatalogConfig, CatalogError, InMemoryCatalog};
