//! Lookup Contract Tests
//!
//! Resolver stubs exercising the not-found and pass-through paths.

use crate::common::*;
use skukey::{Error, Result};
use std::io;

struct AlwaysFails;

impl SkuResolver for AlwaysFails {
    fn resolve(&self, coordinate: &Coordinate) -> Result<Sku> {
        Err(Error::not_found(coordinate.clone()))
    }
}

struct Offline;

impl SkuResolver for Offline {
    fn resolve(&self, _coordinate: &Coordinate) -> Result<Sku> {
        Err(Error::backend(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "catalog connection lost",
        )))
    }
}

#[test]
fn not_found_carries_exact_coordinate() {
    let coord = Coordinate::new("US", "P1")
        .with_dimension("color", "red")
        .with_dimension("size", "M");

    match AlwaysFails.resolve(&coord) {
        Err(Error::CoordinateNotFound { coordinate }) => {
            assert_eq!(coordinate, coord);
            assert_eq!(coordinate.cache_key(), coord.cache_key());
        }
        other => panic!("Expected CoordinateNotFound, got {:?}", other),
    }
}

#[test]
fn not_found_message_names_coordinate() {
    let coord = Coordinate::new("US", "P1").with_dimension("color", "red");
    let err = AlwaysFails.resolve(&coord).unwrap_err();
    assert_eq!(err.to_string(), "SKU Coordinate Not Found: US:P1:color=red;");
}

#[test]
fn backend_errors_pass_through_unchanged() {
    let err = Offline.resolve(&Coordinate::new("US", "P1")).unwrap_err();
    assert_eq!(err.to_string(), "catalog connection lost");
    let Error::Backend(inner) = err else {
        panic!("Wrong error variant");
    };
    assert_eq!(
        inner.downcast_ref::<io::Error>().unwrap().kind(),
        io::ErrorKind::BrokenPipe
    );
}

#[test]
fn trait_objects_resolve() {
    let resolvers: Vec<Box<dyn SkuResolver>> =
        vec![Box::new(AlwaysFails), Box::new(InMemoryCatalog::new())];
    let coord = Coordinate::new("US", "P1");
    for resolver in &resolvers {
        assert!(resolver.resolve(&coord).unwrap_err().is_not_found());
        assert!(!resolver.contains(&coord).unwrap());
    }
}
