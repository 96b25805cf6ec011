//! Dimension sets
//!
//! A [`Dimensions`] value maps dimension names (color, size, region, ...) to
//! values. Its canonical projection is what feeds the cache key, so the
//! projection must depend only on content, never on the order pairs were
//! inserted in.
//!
//! Pairs are held in a `BTreeMap`, which iterates in byte-wise key order.
//! Every canonical projection walks that order; there is no code path that
//! serializes pairs in any other order.

use crate::key_format::{self, CanonicalSink, PAIR_SEPARATOR, PAIR_TERMINATOR};
use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap, HashMap};
use std::fmt;

/// Unordered set of named dimension values
///
/// Two sets with equal content compare, hash and canonicalize identically
/// regardless of how they were built.
///
/// # Examples
///
/// ```
/// use skukey_core::Dimensions;
///
/// let a: Dimensions = [("size", "XL"), ("color", "red")].into_iter().collect();
/// let b = Dimensions::new().with("color", "red").with("size", "XL");
///
/// assert_eq!(a, b);
/// assert_eq!(a.canonical_string(), "color=red;size=XL;");
/// assert_eq!(a.sorted_keys(), vec!["color", "size"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimensions(BTreeMap<String, String>);

impl Dimensions {
    /// Create an empty dimension set
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a dimension, returning the value it replaced
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a dimension value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether a dimension with this name is present
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of dimensions
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no dimensions
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in canonical order
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    /// Dimension names in byte-wise lexicographic order
    pub fn sorted_keys(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Exact byte length of [`canonical_string`](Self::canonical_string)
    pub fn canonical_len(&self) -> usize {
        self.0
            .iter()
            .map(|(k, v)| {
                k.len() + PAIR_SEPARATOR.len_utf8() + v.len() + PAIR_TERMINATOR.len_utf8()
            })
            .sum()
    }

    /// Canonical projection: `name=value;` for every pair in sorted-key order
    ///
    /// The trailing terminator is kept on the last pair. An empty set yields
    /// the empty string.
    pub fn canonical_string(&self) -> String {
        let mut out = String::with_capacity(self.canonical_len());
        self.write_canonical(&mut out);
        out
    }

    /// XXH64 of the canonical projection, streamed without allocating
    pub fn canonical_hash(&self) -> u64 {
        let mut hasher = key_format::dimension_hasher();
        self.write_canonical(&mut hasher);
        hasher.digest()
    }

    /// The single canonical writer shared by every projection
    pub(crate) fn write_canonical<S: CanonicalSink>(&self, sink: &mut S) {
        for (name, value) in &self.0 {
            sink.push_fragment(name);
            sink.push_separator(PAIR_SEPARATOR);
            sink.push_fragment(value);
            sink.push_separator(PAIR_TERMINATOR);
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}

/// Iterator over dimension pairs in canonical order
#[derive(Debug, Clone)]
pub struct Iter<'a>(btree_map::Iter<'a, String, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Dimensions {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dimensions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dims = Dimensions::new();
        dims.extend(iter);
        dims
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Dimensions {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl From<BTreeMap<String, String>> for Dimensions {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<S> From<HashMap<String, String, S>> for Dimensions {
    fn from(map: HashMap<String, String, S>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Dimensions {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
