use catalog_core::types::DbId;
use sqlx::FromRow;

/// A row from the `users` table.
///
/// Contains the password hash -- never expose it in API responses.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
}
