//! SKU coordinates and cache key derivation
//!
//! A [`Coordinate`] is the `(scope, product code, dimensions)` triple that
//! identifies one product variant. Its [`cache_key`](Coordinate::cache_key)
//! is the canonical string form used by caches and catalog indexes.
//!
//! ## Key layout
//!
//! | Dimensions | Key |
//! |------------|-----|
//! | empty | `scope:code` |
//! | non-empty | `scope:code:hhhhhhhhhhhhhhhh` |
//!
//! where the hash segment is the zero-padded XXH64 of the canonical dimension
//! string. See [`crate::key_format`] for the frozen parameters.

use crate::dimensions::Dimensions;
use crate::key_format::{encode_hash_hex, HASH_HEX_WIDTH, SEGMENT_SEPARATOR};
use crate::types::{ProductCode, ProjectScope};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dimension-qualified identity of a SKU
///
/// Equality and hashing follow content: coordinates whose dimension sets were
/// built in different orders are the same coordinate.
///
/// # Examples
///
/// ```
/// use skukey_core::Coordinate;
///
/// let plain = Coordinate::new("US", "P1");
/// assert_eq!(plain.cache_key(), "US:P1");
///
/// let red = Coordinate::new("US", "P1").with_dimension("color", "red");
/// assert_eq!(red.cache_key(), "US:P1:c595431927dde5a6");
/// assert_eq!(red.to_string(), "US:P1:color=red;");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    scope: ProjectScope,
    product_code: ProductCode,
    #[serde(default)]
    dimensions: Dimensions,
}

impl Coordinate {
    /// Create a coordinate with no dimensions
    pub fn new(scope: impl Into<ProjectScope>, product_code: impl Into<ProductCode>) -> Self {
        Self {
            scope: scope.into(),
            product_code: product_code.into(),
            dimensions: Dimensions::new(),
        }
    }

    /// Add one dimension, replacing any existing value for `name`
    pub fn with_dimension(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.insert(name, value);
        self
    }

    /// Replace the whole dimension set
    pub fn with_dimensions(mut self, dimensions: impl Into<Dimensions>) -> Self {
        self.dimensions = dimensions.into();
        self
    }

    /// Scope this coordinate belongs to
    pub fn scope(&self) -> &ProjectScope {
        &self.scope
    }

    /// Product code within the scope
    pub fn product_code(&self) -> &ProductCode {
        &self.product_code
    }

    /// Dimension set qualifying the product
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Hash of the dimension set, `None` when there are no dimensions
    pub fn dimension_hash(&self) -> Option<u64> {
        if self.dimensions.is_empty() {
            None
        } else {
            Some(self.dimensions.canonical_hash())
        }
    }

    /// Human-readable form `scope:code:name=value;...`
    ///
    /// Meant for logs. It is not canonical: values containing the separators
    /// can make distinct coordinates print the same.
    pub fn display_string(&self) -> String {
        self.to_string()
    }

    /// Canonical cache key
    ///
    /// Identical for every coordinate with equal scope, product code and
    /// dimension content. Runs on the hot path, so the buffer is sized
    /// exactly and the dimension hash is streamed without an intermediate
    /// string.
    pub fn cache_key(&self) -> String {
        let hash = self.dimension_hash();

        let mut capacity = self.scope.as_str().len()
            + SEGMENT_SEPARATOR.len_utf8()
            + self.product_code.as_str().len();
        if hash.is_some() {
            capacity += SEGMENT_SEPARATOR.len_utf8() + HASH_HEX_WIDTH;
        }

        let mut key = String::with_capacity(capacity);
        key.push_str(self.scope.as_str());
        key.push(SEGMENT_SEPARATOR);
        key.push_str(self.product_code.as_str());

        if let Some(hash) = hash {
            key.push(SEGMENT_SEPARATOR);
            encode_hash_hex(hash, &mut key);
        }

        debug_assert_eq!(key.len(), capacity);
        key
    }

    /// Split into `(scope, product_code, dimensions)`
    pub fn into_parts(self) -> (ProjectScope, ProductCode, Dimensions) {
        (self.scope, self.product_code, self.dimensions)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.scope,
            self.product_code,
            self.dimensions,
            sep = SEGMENT_SEPARATOR
        )
    }
}
