//! Cache key format for SKU coordinates
//!
//! This module pins every parameter that shapes a cache key. Caches and
//! indexes keyed by [`Coordinate::cache_key`](crate::Coordinate::cache_key)
//! depend on these values staying put.
//!
//! ## Contract
//!
//! Key format version 1 is FROZEN:
//! - Layout is `scope ':' product_code` optionally followed by `':' hash_hex`
//! - The hash segment is present only when the dimension set is non-empty
//! - Dimension pairs are canonicalized as `key '=' value ';'` in byte-wise
//!   key order, trailing terminator included
//! - The hash is XXH64 with seed 0 over the canonical dimension string
//! - `hash_hex` is lowercase hexadecimal, zero-padded to 16 digits
//!
//! Changing any of the above invalidates every previously issued key and
//! requires bumping [`KEY_FORMAT_VERSION`].

use std::fmt::Write;

use xxhash_rust::xxh64::Xxh64;

/// Version of the key derivation scheme described in this module
pub const KEY_FORMAT_VERSION: u32 = 1;

/// Separator between the scope, product code and hash segments
///
/// Scope and product-code vocabularies must not contain this character.
pub const SEGMENT_SEPARATOR: char = ':';

/// Separator between a dimension name and its value in the canonical string
pub const PAIR_SEPARATOR: char = '=';

/// Terminator written after every dimension pair in the canonical string
pub const PAIR_TERMINATOR: char = ';';

/// Seed for the XXH64 dimension hash
pub const HASH_SEED: u64 = 0;

/// Width of the hex-encoded dimension hash
pub const HASH_HEX_WIDTH: usize = 16;

/// Destination for canonical dimension fragments
///
/// The canonical string and the dimension hash are both produced by feeding
/// the same fragments into different sinks, so the two cannot drift apart.
pub(crate) trait CanonicalSink {
    fn push_fragment(&mut self, fragment: &str);

    fn push_separator(&mut self, separator: char);
}

impl CanonicalSink for String {
    #[inline]
    fn push_fragment(&mut self, fragment: &str) {
        self.push_str(fragment);
    }

    #[inline]
    fn push_separator(&mut self, separator: char) {
        self.push(separator);
    }
}

impl CanonicalSink for Xxh64 {
    #[inline]
    fn push_fragment(&mut self, fragment: &str) {
        self.update(fragment.as_bytes());
    }

    #[inline]
    fn push_separator(&mut self, separator: char) {
        let mut buf = [0u8; 4];
        self.update(separator.encode_utf8(&mut buf).as_bytes());
    }
}

/// Fresh hasher configured for key format v1
pub(crate) fn dimension_hasher() -> Xxh64 {
    Xxh64::new(HASH_SEED)
}

/// Hash a canonical dimension string
///
/// Equivalent to the streaming hash computed by
/// [`Dimensions::canonical_hash`](crate::Dimensions::canonical_hash).
pub fn hash_dimensions(canonical: &str) -> u64 {
    xxhash_rust::xxh64::xxh64(canonical.as_bytes(), HASH_SEED)
}

/// Append `hash` as exactly [`HASH_HEX_WIDTH`] lowercase hex digits
pub fn encode_hash_hex(hash: u64, out: &mut String) {
    // Writing into a String cannot fail
    let _ = write!(out, "{:0width$x}", hash, width = HASH_HEX_WIDTH);
}
