//! In-memory SKU catalog
//!
//! Reference implementation of the [`SkuResolver`] lookup contract, indexed by
//! [`Coordinate::cache_key`].
//!
//! # Design
//!
//! - DashMap: sharded, lock-free reads, writes lock only the target shard
//! - FxHasher: keys are already well-mixed strings, a fast non-crypto hash suffices
//! - Stored coordinates are compared on every read, so a cache key collision
//!   can never hand back the wrong SKU
//!
//! # Thread Safety
//!
//! All operations take `&self` and are safe to call from many threads through
//! an `Arc<InMemoryCatalog>`.

use std::hash::BuildHasherDefault;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxHasher;
use skukey_core::{Coordinate, Error, Result, Sku, SkuId, SkuResolver};
use tracing::{debug, trace, warn};

use crate::config::CatalogConfig;
use crate::error::CatalogError;

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Concurrent in-memory catalog keyed by coordinate cache key
///
/// # Example
///
/// ```
/// use skukey_core::{Coordinate, SkuResolver};
/// use skukey_storage::InMemoryCatalog;
///
/// let catalog = InMemoryCatalog::new();
/// let coord = Coordinate::new("US", "P1").with_dimension("color", "red");
/// let sku = catalog.register(coord.clone()).unwrap();
///
/// assert_eq!(catalog.resolve(&coord).unwrap(), sku);
/// ```
#[derive(Debug)]
pub struct InMemoryCatalog {
    entries: DashMap<String, Sku, FxBuildHasher>,
}

impl InMemoryCatalog {
    /// Create a catalog with default sizing
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_capacity_and_hasher(
                CatalogConfig::default().initial_capacity,
                FxBuildHasher::default(),
            ),
        }
    }

    /// Create a catalog with explicit sizing
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidConfig`] if the configuration is rejected.
    pub fn with_config(config: CatalogConfig) -> std::result::Result<Self, CatalogError> {
        config.validate()?;
        let entries = match config.shard_amount {
            Some(shards) => DashMap::with_capacity_and_hasher_and_shard_amount(
                config.initial_capacity,
                FxBuildHasher::default(),
                shards,
            ),
            None => {
                DashMap::with_capacity_and_hasher(config.initial_capacity, FxBuildHasher::default())
            }
        };
        debug!(
            target: "skukey::catalog",
            capacity = config.initial_capacity,
            shards = ?config.shard_amount,
            "Catalog created"
        );
        Ok(Self { entries })
    }

    /// Register a coordinate, assigning a fresh identifier if it is new
    ///
    /// Registering a coordinate that is already present (in any dimension
    /// order) returns the existing SKU unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::KeyCollision`] if a different coordinate already
    /// owns the same cache key.
    pub fn register(&self, coordinate: Coordinate) -> std::result::Result<Sku, CatalogError> {
        match self.entries.entry(coordinate.cache_key()) {
            Entry::Occupied(entry) => {
                if entry.get().coordinate() == &coordinate {
                    return Ok(entry.get().clone());
                }
                Err(collision(entry.key(), entry.get(), coordinate))
            }
            Entry::Vacant(entry) => {
                let sku = Sku::new(SkuId::generate(), coordinate);
                debug!(
                    target: "skukey::catalog",
                    key = %entry.key(),
                    id = %sku.id(),
                    "SKU registered"
                );
                entry.insert(sku.clone());
                Ok(sku)
            }
        }
    }

    /// Store a SKU with a caller-assigned identifier
    ///
    /// Returns the SKU previously stored for the same coordinate, if any.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::KeyCollision`] if a different coordinate already
    /// owns the same cache key.
    pub fn insert(&self, sku: Sku) -> std::result::Result<Option<Sku>, CatalogError> {
        match self.entries.entry(sku.cache_key()) {
            Entry::Occupied(mut entry) => {
                if entry.get().coordinate() != sku.coordinate() {
                    let (_, coordinate) = sku.into_parts();
                    return Err(collision(entry.key(), entry.get(), coordinate));
                }
                Ok(Some(entry.insert(sku)))
            }
            Entry::Vacant(entry) => {
                entry.insert(sku);
                Ok(None)
            }
        }
    }

    /// Look up the SKU for a coordinate without going through the error path
    pub fn get(&self, coordinate: &Coordinate) -> Option<Sku> {
        self.entries
            .get(&coordinate.cache_key())
            .filter(|entry| entry.coordinate() == coordinate)
            .map(|entry| entry.value().clone())
    }

    /// Remove the SKU registered for a coordinate
    pub fn remove(&self, coordinate: &Coordinate) -> Option<Sku> {
        self.entries
            .remove_if(&coordinate.cache_key(), |_, sku| sku.coordinate() == coordinate)
            .map(|(_, sku)| sku)
    }

    /// Number of registered SKUs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every SKU
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Place `sku` under an arbitrary key to simulate a hash collision
    #[cfg(test)]
    fn insert_raw(&self, key: String, sku: Sku) {
        self.entries.insert(key, sku);
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl SkuResolver for InMemoryCatalog {
    fn resolve(&self, coordinate: &Coordinate) -> Result<Sku> {
        let key = coordinate.cache_key();
        match self.entries.get(&key) {
            Some(entry) if entry.coordinate() == coordinate => Ok(entry.value().clone()),
            Some(entry) => {
                warn!(
                    target: "skukey::catalog",
                    key = %key,
                    stored = %entry.coordinate(),
                    requested = %coordinate,
                    "Cache key collision"
                );
                Err(Error::not_found(coordinate.clone()))
            }
            None => {
                trace!(target: "skukey::catalog", key = %key, "Catalog miss");
                Err(Error::not_found(coordinate.clone()))
            }
        }
    }
}

fn collision(key: &str, existing: &Sku, incoming: Coordinate) -> CatalogError {
    warn!(
        target: "skukey::catalog",
        key = %key,
        existing = %existing.coordinate(),
        incoming = %incoming,
        "Cache key collision"
    );
    CatalogError::KeyCollision {
        key: key.to_string(),
        existing: Box::new(existing.coordinate().clone()),
        incoming: Box::new(incoming),
    }
}
