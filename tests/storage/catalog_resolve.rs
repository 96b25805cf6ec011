//! Catalog Resolve Tests
//!
//! The in-memory catalog honours the lookup contract: identical canonical
//! identity resolves, anything else is not-found with the original coordinate.

use crate::common::*;
use skukey::{CatalogConfig, Error, SkuId};

fn catalog() -> InMemoryCatalog {
    init_tracing();
    InMemoryCatalog::with_config(CatalogConfig::for_testing()).unwrap()
}

#[test]
fn registered_coordinate_resolves() {
    let catalog = catalog();
    let coord = Coordinate::new("US", "P1").with_dimension("color", "red");
    let sku = catalog.register(coord.clone()).unwrap();

    let resolved = catalog.resolve(&coord).unwrap();
    assert_eq!(resolved.id(), sku.id());
    assert_eq!(resolved.coordinate(), &coord);
}

#[test]
fn resolve_ignores_dimension_order() {
    let catalog = catalog();
    let pairs = [("region", "us-east-1"), ("env", "production"), ("term", "YEAR")];
    let stored: Dimensions = pairs.into_iter().collect();
    catalog
        .insert(Sku::new("sku-42", Coordinate::new("US", "P1").with_dimensions(stored)))
        .unwrap();

    let query = pairs
        .into_iter()
        .rev()
        .fold(Coordinate::new("US", "P1"), |c, (k, v)| c.with_dimension(k, v));
    assert_eq!(catalog.resolve(&query).unwrap().id(), &SkuId::new("sku-42"));
}

#[test]
fn no_dimensions_and_empty_dimensions_are_one_entry() {
    let catalog = catalog();
    let a = catalog.register(Coordinate::new("US", "P1")).unwrap();
    let b = catalog
        .register(Coordinate::new("US", "P1").with_dimensions(Dimensions::new()))
        .unwrap();
    assert_eq!(a.id(), b.id());
    assert_eq!(catalog.len(), 1);
}

#[test]
fn unknown_coordinate_is_not_found() {
    let catalog = catalog();
    catalog
        .register(Coordinate::new("US", "P1").with_dimension("color", "red"))
        .unwrap();

    let query = Coordinate::new("US", "P1").with_dimension("color", "blue");
    match catalog.resolve(&query) {
        Err(Error::CoordinateNotFound { coordinate }) => assert_eq!(coordinate, query),
        other => panic!("Expected CoordinateNotFound, got {:?}", other),
    }
}

#[test]
fn removed_coordinate_is_not_found() {
    let catalog = catalog();
    let coord = Coordinate::new("EU", "P2").with_dimension("size", "L");
    catalog.register(coord.clone()).unwrap();
    catalog.remove(&coord).unwrap();
    assert!(catalog.resolve(&coord).unwrap_err().is_not_found());
}

#[test]
fn scopes_partition_product_codes() {
    let catalog = catalog();
    let us = catalog.register(Coordinate::new("US", "P1")).unwrap();
    let eu = catalog.register(Coordinate::new("EU", "P1")).unwrap();
    assert_ne!(us.id(), eu.id());
    assert_eq!(catalog.len(), 2);
}
