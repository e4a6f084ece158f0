//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                                  - Liveness message with timestamp
//! GET    /health                            - Health check
//! GET    /health/ready                      - Readiness check (pings the database)
//!
//! # Auth
//! POST   /api/auth/register                 - Register, returns access token
//! POST   /api/auth/login                    - Login, returns access token
//!
//! # Products
//! GET    /products?page=                    - Paginated listing
//! POST   /products                          - Insert a product
//! GET    /products/{product_id}             - Product detail
//! GET    /flash-products?page=              - Paginated listing, flash-sale only
//! GET    /top-products                      - All products by rating, best first
//! DELETE /top-products/{id}                 - Delete a product
//! GET    /update-products/{product_id}      - Product detail (edit-form fetch)
//!
//! # Users (admin)
//! GET    /all-users                         - All users, hashes redacted
//! GET    /user/{user_email}                 - Single user or null
//! DELETE /admin/user-delete/{user_id}       - Delete a user
//! PATCH  /admin/make-admin-edit/{user_id}   - Promote a user to admin
//!
//! # Cart
//! POST   /cart                              - Add a cart line
//! GET    /cart/{user_email}                 - Cart lines for a user
//! ```
//!
//! The odd path shapes (`/update-products/...`, `/top-products/{id}` for
//! delete) are part of the existing client contract and kept as-is.

pub mod auth;
pub mod cart;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        // Products
        .route("/products", get(products::list).post(products::create))
        .route("/products/{product_id}", get(products::show))
        .route("/flash-products", get(products::flash_list))
        .route("/top-products", get(products::top))
        .route("/top-products/{id}", delete(products::remove))
        .route("/update-products/{product_id}", get(products::show))
        // Users
        .route("/all-users", get(users::list))
        .route("/user/{user_email}", get(users::show))
        .route("/admin/user-delete/{user_id}", delete(users::remove))
        .route("/admin/make-admin-edit/{user_id}", patch(users::promote))
        // Cart
        .route("/cart", post(cart::add))
        .route("/cart/{user_email}", get(cart::list_for_user))
}
