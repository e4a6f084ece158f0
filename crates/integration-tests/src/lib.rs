//! Integration tests for MangoMart.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and the API server
//! docker compose up -d postgres
//! cargo run -p mangomart-api
//!
//! # Run integration tests
//! cargo test -p mangomart-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `api_auth` - Registration and login contract
//! - `api_catalog` - Product listing, pagination, and detail
//! - `api_admin_cart` - Cart and user administration operations
//!
//! Tests are `#[ignore]`d by default because they need a running server;
//! the server address is taken from `MANGOMART_BASE_URL` (default
//! `http://localhost:5000`).
