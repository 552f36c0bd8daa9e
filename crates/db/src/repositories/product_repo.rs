//! Repository for the `products` table.

use catalog_core::pagination::PageRequest;
use catalog_core::product::ProductFields;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{Product, ProductPage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, stock";

/// Filter applied identically to the count and row queries when searching.
const SEARCH_FILTER: &str = "WHERE name ILIKE $1 OR description ILIKE $1";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// List one page of products, optionally filtered by an `ILIKE` pattern.
    ///
    /// The count and the page are read in a single repeatable-read snapshot,
    /// so `total` always agrees with the rows returned even while other
    /// requests are writing.
    pub async fn list(
        pool: &PgPool,
        page: PageRequest,
        pattern: Option<&str>,
    ) -> Result<ProductPage, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let (total, products) = match pattern {
            Some(pattern) => {
                let total: i64 =
                    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM products {SEARCH_FILTER}"))
                        .bind(pattern)
                        .fetch_one(&mut *tx)
                        .await?;
                let query = format!(
                    "SELECT {COLUMNS} FROM products {SEARCH_FILTER} \
                     ORDER BY id LIMIT $2 OFFSET $3"
                );
                let products = sqlx::query_as::<_, Product>(&query)
                    .bind(pattern)
                    .bind(page.limit)
                    .bind(page.offset())
                    .fetch_all(&mut *tx)
                    .await?;
                (total, products)
            }
            None => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
                    .fetch_one(&mut *tx)
                    .await?;
                let query =
                    format!("SELECT {COLUMNS} FROM products ORDER BY id LIMIT $1 OFFSET $2");
                let products = sqlx::query_as::<_, Product>(&query)
                    .bind(page.limit)
                    .bind(page.offset())
                    .fetch_all(&mut *tx)
                    .await?;
                (total, products)
            }
        };

        tx.commit().await?;
        Ok(ProductPage { total, products })
    }

    /// Find a product by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new product, returning its generated ID.
    pub async fn create(pool: &PgPool, input: &ProductFields) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO products (name, description, price, stock) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.stock)
        .fetch_one(pool)
        .await
    }

    /// Replace every mutable column of a product.
    ///
    /// Returns `true` if a row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProductFields,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE products SET name = $2, description = $3, price = $4, stock = $5 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.stock)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a product by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
