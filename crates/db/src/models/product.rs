use catalog_core::types::DbId;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `products` table.
///
/// `price` serializes as a decimal string with two places (e.g. `"1.50"`).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

/// One page of products plus the size of the filtered set it came from.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub total: i64,
    pub products: Vec<Product>,
}
