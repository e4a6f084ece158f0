//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Serialize;

use mangomart_core::ProductId;

use crate::db::{ProductFilter, ProductRepository};
use crate::error::{ApiError, Result};
use crate::models::{NewProduct, Page, PageQuery, Product};
use crate::state::AppState;

/// Response for delete operations.
///
/// Deleting a nonexistent ID reports `deletedCount: 0`, not an error.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_count: u64,
}

/// Handle `GET /products?page=` - unconditional paginated listing.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<Product>>> {
    paginated(&state, ProductFilter::All, &query).await
}

/// Handle `GET /flash-products?page=` - flash-sale items only.
pub async fn flash_list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<Product>>> {
    paginated(&state, ProductFilter::FlashSale, &query).await
}

async fn paginated(
    state: &AppState,
    filter: ProductFilter,
    query: &PageQuery,
) -> Result<Json<Page<Product>>> {
    let page = query.page();
    let (products, total) = ProductRepository::new(state.pool())
        .page(filter, page)
        .await?;

    Ok(Json(Page::new(products, total, page)))
}

/// Handle `GET /top-products` - the full catalog sorted by rating
/// descending, no pagination. Kept separate from the paginated listing on
/// purpose.
pub async fn top(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).top_by_rating().await?;
    Ok(Json(products))
}

/// Handle `POST /products`.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = ProductRepository::new(state.pool()).create(&body).await?;

    tracing::info!(product_id = %product.id, "product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Handle `GET /products/{product_id}` and `GET /update-products/{product_id}`.
///
/// # Errors
///
/// Returns 404 if no product has this ID.
pub async fn show(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .get_by_id(product_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

/// Handle `DELETE /top-products/{id}`.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<DeleteResponse>> {
    let deleted_count = ProductRepository::new(state.pool()).delete(id).await?;

    Ok(Json(DeleteResponse { deleted_count }))
}
