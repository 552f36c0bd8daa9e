//! Client side of the product catalog.
//!
//! [`api`] talks HTTP; [`list`] and [`form`] are headless view models of
//! the two screens (product table and create/edit form). They hold the
//! screen state a UI would render and run the same requests the UI would
//! trigger, so any front end can drive them.

pub mod api;
pub mod debounce;
pub mod dialog;
pub mod error;
pub mod form;
pub mod list;
pub mod model;

pub use api::{HttpProductApi, ProductApi};
pub use error::ClientError;
