#[path = "../common/mod.rs"]
mod common;

mod catalog_resolve;
