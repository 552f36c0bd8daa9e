//! Row structs and query result types.
//!
//! Validated write payloads live in `catalog_core::product`; this module
//! only describes what comes back out of the database.

pub mod product;
pub mod user;
