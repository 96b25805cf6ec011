//! Error types for SKU resolution
//!
//! Key derivation never fails; the only failures in this crate come from
//! resolving a coordinate against a catalog. We use `thiserror` for the
//! `Display` and `Error` implementations.

use crate::coordinate::Coordinate;
use thiserror::Error;

/// Boxed error produced by a resolver's own backend
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for resolution
pub type Result<T> = std::result::Result<T, Error>;

/// Resolution errors
#[derive(Debug, Error)]
pub enum Error {
    /// No SKU is registered under a coordinate with this canonical identity
    #[error("SKU Coordinate Not Found: {coordinate}")]
    CoordinateNotFound {
        /// The coordinate exactly as it was passed to `resolve`
        coordinate: Coordinate,
    },

    /// Failure inside the resolver's backend, passed through unchanged
    #[error(transparent)]
    Backend(BackendError),
}

impl Error {
    /// Build a not-found error for `coordinate`
    pub fn not_found(coordinate: Coordinate) -> Self {
        Error::CoordinateNotFound { coordinate }
    }

    /// Wrap a backend failure
    pub fn backend(err: impl Into<BackendError>) -> Self {
        Error::Backend(err.into())
    }

    /// Whether this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::CoordinateNotFound { .. })
    }

    /// The unresolved coordinate, if this is a not-found error
    pub fn coordinate(&self) -> Option<&Coordinate> {
        match self {
            Error::CoordinateNotFound { coordinate } => Some(coordinate),
            Error::Backend(_) => None,
        }
    }
}
