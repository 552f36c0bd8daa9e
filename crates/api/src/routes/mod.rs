#[cfg(feature = "auth")]
pub mod auth;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                 list, create
/// /products/{id}            get, update, delete
///
/// /register                 register (feature `auth`)
/// /login                    login (feature `auth`)
/// ```
pub fn api_routes() -> Router<AppState> {
    let router = Router::new().nest("/products", products::router());

    #[cfg(feature = "auth")]
    let router = router.merge(auth::router());

    router
}
