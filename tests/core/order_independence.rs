//! Order Independence Tests
//!
//! Coordinates built from the same pairs in any insertion order must agree on
//! every canonical projection.

use crate::common::*;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn pairs_and_shuffle() -> impl Strategy<Value = (Vec<(String, String)>, Vec<(String, String)>)> {
    prop::collection::btree_map("[a-zA-Z0-9_-]{1,10}", "[ -~]{0,12}", 0..10).prop_flat_map(
        |map: BTreeMap<String, String>| {
            let pairs: Vec<(String, String)> = map.into_iter().collect();
            (Just(pairs.clone()), Just(pairs).prop_shuffle())
        },
    )
}

proptest! {
    #[test]
    fn shuffled_dimensions_canonicalize_identically((pairs, shuffled) in pairs_and_shuffle()) {
        let a: Dimensions = pairs.into_iter().collect();
        let b: Dimensions = shuffled.into_iter().collect();

        prop_assert_eq!(a.sorted_keys(), b.sorted_keys());
        prop_assert_eq!(a.canonical_string(), b.canonical_string());
        prop_assert_eq!(&a, &b);
    }

    #[test]
    fn shuffled_dimensions_share_cache_key((pairs, shuffled) in pairs_and_shuffle()) {
        let a = Coordinate::new("US", "P1").with_dimensions(pairs.into_iter().collect::<Dimensions>());
        let b = shuffled
            .into_iter()
            .fold(Coordinate::new("US", "P1"), |c, (k, v)| c.with_dimension(k, v));

        prop_assert_eq!(a.cache_key(), b.cache_key());
        prop_assert_eq!(a.display_string(), b.display_string());
    }

    #[test]
    fn sorted_keys_are_bytewise_sorted(map in prop::collection::hash_map(".{0,6}", ".{0,6}", 0..12)) {
        let dims = Dimensions::from(map);
        let keys = dims.sorted_keys();
        prop_assert!(keys.windows(2).all(|w| w[0].as_bytes() < w[1].as_bytes()));
    }

    #[test]
    fn canonical_len_matches(map in prop::collection::hash_map(".{0,6}", ".{0,6}", 0..12)) {
        let dims = Dimensions::from(map);
        prop_assert_eq!(dims.canonical_len(), dims.canonical_string().len());
    }
}

#[test]
fn two_pair_swap() {
    let a = Coordinate::new("US", "P1")
        .with_dimension("key1", "val1")
        .with_dimension("key2", "val2");
    let b = Coordinate::new("US", "P1")
        .with_dimension("key2", "val2")
        .with_dimension("key1", "val1");
    assert_eq!(a.cache_key(), b.cache_key());
}
