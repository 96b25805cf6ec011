//! Catalog configuration
//!
//! Sizing knobs for [`InMemoryCatalog`](crate::InMemoryCatalog). None of them
//! affect key derivation; they only shape the underlying map.

use crate::error::CatalogError;

/// Sizing for the in-memory catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Number of SKUs to reserve space for up front (default: 1024)
    pub initial_capacity: usize,

    /// Number of DashMap shards; must be a power of two greater than one.
    /// `None` lets DashMap pick based on available parallelism.
    pub shard_amount: Option<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            initial_capacity: 1024,
            shard_amount: None,
        }
    }
}

impl CatalogConfig {
    /// Small, fixed sizing for unit tests
    pub fn for_testing() -> Self {
        CatalogConfig {
            initial_capacity: 16,
            shard_amount: Some(4),
        }
    }

    /// Check the configuration before it reaches DashMap
    ///
    /// DashMap asserts on a bad shard amount, so it is rejected here instead.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if let Some(shards) = self.shard_amount {
            if shards < 2 || !shards.is_power_of_two() {
                return Err(CatalogError::InvalidConfig(format!(
                    "shard_amount must be a power of two greater than 1, got {}",
                    shards
                )));
            }
        }
        Ok(())
    }
}
