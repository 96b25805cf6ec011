//! Identifier types for the catalog
//!
//! This module defines the opaque string identifiers that make up a
//! coordinate and a resolved SKU:
//! - ProjectScope: Namespace qualifier partitioning product codes
//! - ProductCode: Product identifier within a scope
//! - SkuId: Internal identifier assigned by the catalog system
//!
//! None of these are validated here. The vocabulary of acceptable scopes and
//! product codes is owned by the catalog's naming policy; the only assumption
//! the key format makes is that neither contains the segment separator
//! (see [`crate::key_format::SEGMENT_SEPARATOR`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw string
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the raw string
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwrap into the raw string
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Scoped-namespace token that partitions product codes
    ///
    /// Typically a project or tenant identifier such as `"US"` or
    /// `"Global-Main-Scope"`.
    ProjectScope
);

string_id!(
    /// Opaque product token within a scope
    ProductCode
);

string_id!(
    /// Internal SKU identifier
    ///
    /// Assigned by the catalog system when a coordinate is first registered.
    /// Callers treat it as opaque; equality is the only meaningful operation.
    SkuId
);

impl SkuId {
    /// Generate a fresh identifier backed by a random UUID v4
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}
