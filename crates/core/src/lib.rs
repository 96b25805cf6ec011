//! Core types and traits for SKU coordinates
//!
//! This crate defines the value types used to identify a product variant and
//! the canonical cache key derived from it:
//! - ProjectScope, ProductCode, SkuId: Opaque identifier newtypes
//! - Dimensions: Unordered name → value set with a canonical projection
//! - Coordinate: (scope, product code, dimensions) with `cache_key()`
//! - Sku: Internal identifier bound to a coordinate
//! - SkuResolver: Lookup contract implemented by catalog backends
//! - Error: Not-found and backend failures from resolution
//! - key_format: Frozen parameters of cache key format v1
//!
//! All types are immutable values once built and are `Send + Sync`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coordinate;
pub mod dimensions;
pub mod error;
pub mod key_format;
pub mod sku;
pub mod traits;
pub mod types;

pub use coordinate::Coordinate;
pub use dimensions::Dimensions;
pub use error::{BackendError, Error, Result};
pub use key_format::KEY_FORMAT_VERSION;
pub use sku::Sku;
pub use traits::SkuResolver;
pub use types::{ProductCode, ProjectScope, SkuId};
