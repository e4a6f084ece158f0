//! User administration route handlers.
//!
//! Every response here is built from the redacted [`User`] type, so no
//! endpoint can return a password hash.

use axum::{
    Json,
    extract::{Path, State},
};

use mangomart_core::UserId;

use crate::db::UserRepository;
use crate::error::{ApiError, Result};
use crate::models::User;
use crate::routes::products::DeleteResponse;
use crate::state::AppState;

/// Handle `GET /all-users`.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = UserRepository::new(state.pool()).list().await?;
    Ok(Json(users))
}

/// Handle `GET /user/{user_email}`.
///
/// An unknown email yields a `null` body, not a 404.
pub async fn show(
    State(state): State<AppState>,
    Path(user_email): Path<String>,
) -> Result<Json<Option<User>>> {
    let user = UserRepository::new(state.pool())
        .get_by_email(&user_email)
        .await?;
    Ok(Json(user))
}

/// Handle `DELETE /admin/user-delete/{user_id}`.
pub async fn remove(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<DeleteResponse>> {
    let deleted_count = UserRepository::new(state.pool()).delete(user_id).await?;

    Ok(Json(DeleteResponse { deleted_count }))
}

/// Handle `PATCH /admin/make-admin-edit/{user_id}`.
///
/// Update-only: promoting a nonexistent ID fails with 404 instead of
/// upserting a role-only record.
pub async fn promote(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<User>> {
    let user = UserRepository::new(state.pool())
        .promote_to_admin(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    tracing::info!(user_id = %user.id, "user promoted to admin");

    Ok(Json(user))
}
