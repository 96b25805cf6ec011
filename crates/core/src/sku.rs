//! Resolved catalog entries

use crate::coordinate::Coordinate;
use crate::types::SkuId;
use serde::{Deserialize, Serialize};

/// A concrete catalog entry: an internal identifier bound to a coordinate
///
/// SKUs are created by the catalog when it resolves or registers a
/// coordinate. This crate only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sku {
    id: SkuId,
    coordinate: Coordinate,
}

impl Sku {
    /// Bind an identifier to a coordinate
    pub fn new(id: impl Into<SkuId>, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            coordinate,
        }
    }

    /// Internal identifier
    pub fn id(&self) -> &SkuId {
        &self.id
    }

    /// Coordinate this SKU was resolved from
    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// Cache key of the embedded coordinate
    pub fn cache_key(&self) -> String {
        self.coordinate.cache_key()
    }

    /// Split into identifier and coordinate
    pub fn into_parts(self) -> (SkuId, Coordinate) {
        (self.id, self.coordinate)
    }
}
