//! Lookup contract
//!
//! This module defines the [`SkuResolver`] trait that catalog backends
//! implement. The core crate does no resolution of its own; it fixes the shape
//! of the call and the not-found failure so that callers can swap backends
//! without touching key derivation.

use std::sync::Arc;

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::sku::Sku;

/// Resolves a coordinate to the SKU registered under it
///
/// Implementations may use [`Coordinate::cache_key`] as their physical index
/// key, but must only return a SKU whose coordinate has the same canonical
/// identity as the one requested.
///
/// Thread safety: all methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync).
///
/// # Examples
///
/// ```
/// use skukey_core::{Coordinate, Error, Result, Sku, SkuResolver};
///
/// struct Nothing;
///
/// impl SkuResolver for Nothing {
///     fn resolve(&self, coordinate: &Coordinate) -> Result<Sku> {
///         Err(Error::not_found(coordinate.clone()))
///     }
/// }
///
/// let coord = Coordinate::new("US", "P1");
/// let err = Nothing.resolve(&coord).unwrap_err();
/// assert_eq!(err.coordinate(), Some(&coord));
/// ```
pub trait SkuResolver: Send + Sync {
    /// Resolve `coordinate` to its SKU
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinateNotFound`] carrying `coordinate` when no SKU
    /// matches. Backend failures are returned as [`Error::Backend`] unchanged.
    fn resolve(&self, coordinate: &Coordinate) -> Result<Sku>;

    /// Whether a SKU is registered under `coordinate`
    ///
    /// # Errors
    ///
    /// Only backend failures are reported; not-found maps to `Ok(false)`.
    fn contains(&self, coordinate: &Coordinate) -> Result<bool> {
        match self.resolve(coordinate) {
            Ok(_) => Ok(true),
            Err(Error::CoordinateNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl<T: SkuResolver + ?Sized> SkuResolver for &T {
    fn resolve(&self, coordinate: &Coordinate) -> Result<Sku> {
        (**self).resolve(coordinate)
    }

    fn contains(&self, coordinate: &Coordinate) -> Result<bool> {
        (**self).contains(coordinate)
    }
}

impl<T: SkuResolver + ?Sized> SkuResolver for Box<T> {
    fn resolve(&self, coordinate: &Coordinate) -> Result<Sku> {
        (**self).resolve(coordinate)
    }

    fn contains(&self, coordinate: &Coordinate) -> Result<bool> {
        (**self).contains(coordinate)
    }
}

impl<T: SkuResolver + ?Sized> SkuResolver for Arc<T> {
    fn resolve(&self, coordinate: &Coordinate) -> Result<Sku> {
        (**self).resolve(coordinate)
    }

    fn contains(&self, coordinate: &Coordinate) -> Result<bool> {
        (**self).contains(coordinate)
    }
}
