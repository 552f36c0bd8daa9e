//! Domain rules shared by the catalog server and its clients.
//!
//! Zero internal dependencies and no I/O, so the same validation and
//! pagination math runs on both sides of the wire.

pub mod error;
pub mod pagination;
pub mod product;
pub mod search;
pub mod types;
