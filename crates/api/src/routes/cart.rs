//! Cart route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::db::CartRepository;
use crate::error::Result;
use crate::models::{CartItem, NewCartItem};
use crate::state::AppState;

/// Response for `POST /cart`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAddResponse {
    pub result: CartItem,
    pub added_one: bool,
}

/// Handle `POST /cart`.
///
/// Inserts a new cart line unconditionally - adding the same product twice
/// creates two lines.
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<NewCartItem>,
) -> Result<Json<CartAddResponse>> {
    let item = CartRepository::new(state.pool()).add(&body).await?;

    Ok(Json(CartAddResponse {
        result: item,
        added_one: true,
    }))
}

/// Handle `GET /cart/{user_email}`.
///
/// An unknown email yields an empty array.
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_email): Path<String>,
) -> Result<Json<Vec<CartItem>>> {
    let items = CartRepository::new(state.pool())
        .list_for_user(&user_email)
        .await?;
    Ok(Json(items))
}
