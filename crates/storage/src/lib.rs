//! Storage layer for SKU coordinates
//!
//! This crate provides a reference backend for the lookup contract:
//! - InMemoryCatalog: DashMap + FxHasher catalog keyed by `Coordinate::cache_key`
//! - CatalogConfig: Sizing for the catalog
//! - CatalogError: Write-side and configuration failures
//!
//! Production catalogs live elsewhere; this one backs tests, benchmarks and
//! process-local registries.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::InMemoryCatalog;
pub use config::CatalogConfig;
pub use error::CatalogError;
