//! Errors raised by the in-memory catalog
//!
//! Resolution failures use [`skukey_core::Error`]; these cover writes and
//! setup, which the lookup contract does not describe.

use skukey_core::Coordinate;
use thiserror::Error;

/// Catalog write and configuration errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two distinct coordinates derived the same cache key
    #[error("cache key collision on {key}: {existing} already registered, refusing {incoming}")]
    KeyCollision {
        /// The shared cache key
        key: String,
        /// Coordinate already stored under `key`
        existing: Box<Coordinate>,
        /// Coordinate that was being written
        incoming: Box<Coordinate>,
    },

    /// Catalog configuration rejected
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),
}
