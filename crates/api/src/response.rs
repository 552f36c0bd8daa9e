//! Response bodies shared across handlers.

use catalog_core::types::DbId;
use catalog_db::models::product::Product;
use serde::Serialize;

/// `{ "message": ... }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned by `POST /products`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreatedResponse {
    pub message: String,
    pub product_id: DbId,
}

/// Body returned by `GET /products`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub total_products: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub products: Vec<Product>,
}
