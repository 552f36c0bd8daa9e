//! Wire types exchanged with the catalog API.

use catalog_core::types::DbId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

/// Body of `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListPage {
    pub total_products: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub products: Vec<Product>,
}

/// Fields sent on create and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

/// Parameters of a list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: i64,
    pub limit: i64,
    pub search: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageBody {
    pub message: String,
}

/// Body of a successful `POST /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreated {
    pub message: String,
    pub product_id: DbId,
}
