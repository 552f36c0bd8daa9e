//! Handlers for the `/products` resource.
//!
//! None of these routes require authentication.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::product::{validate_product, ProductFields};
use catalog_core::search::like_pattern;
use catalog_core::types::DbId;
use catalog_db::repositories::ProductRepo;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody, LenientQuery};
use crate::query::ProductListParams;
use crate::response::{MessageResponse, ProductCreatedResponse, ProductListResponse};
use crate::state::AppState;

/// Entity name used in not-found errors.
const ENTITY: &str = "Product";

/// Request body for create and update.
///
/// Fields stay untyped until [`ProductPayload::validate`] runs, so a wrong
/// type yields the same 400 message as an out-of-range value.
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub stock: Option<Value>,
}

impl ProductPayload {
    pub fn validate(&self) -> Result<ProductFields, CoreError> {
        validate_product(
            self.name.as_ref(),
            self.description.as_ref(),
            self.price.as_ref(),
            self.stock.as_ref(),
        )
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// GET /api/products
///
/// Paginated listing with optional case-insensitive search over name and
/// description.
pub async fn list_products(
    State(state): State<AppState>,
    query: LenientQuery,
) -> AppResult<impl IntoResponse> {
    let params = ProductListParams::from(&query);
    let page = params.page_request();
    let pattern = params.search.as_deref().and_then(like_pattern);

    let result = ProductRepo::list(&state.pool, page, pattern.as_deref()).await?;

    tracing::debug!(
        page = page.page,
        limit = page.limit,
        search = pattern.is_some(),
        total = result.total,
        returned = result.products.len(),
        "Listed products",
    );

    Ok(Json(ProductListResponse {
        total_products: result.total,
        total_pages: page.total_pages(result.total),
        current_page: page.page,
        products: result.products,
    }))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(product))
}

/// POST /api/products
///
/// Returns 201 with the generated id.
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProductPayload>,
) -> AppResult<impl IntoResponse> {
    let fields = input.validate()?;

    let id = ProductRepo::create(&state.pool, &fields).await?;

    tracing::info!(product_id = id, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(ProductCreatedResponse {
            message: "Product created successfully.".into(),
            product_id: id,
        }),
    ))
}

/// PUT /api/products/{id}
///
/// Replaces name, description, price, and stock.
pub async fn update_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<ProductPayload>,
) -> AppResult<impl IntoResponse> {
    let fields = input.validate()?;

    if !ProductRepo::update(&state.pool, id, &fields).await? {
        return Err(not_found(id));
    }

    tracing::info!(product_id = id, "Product updated");

    Ok(Json(MessageResponse::new("Product updated successfully.")))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    if !ProductRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(product_id = id, "Product deleted");

    Ok(Json(MessageResponse::new("Product deleted successfully.")))
}
