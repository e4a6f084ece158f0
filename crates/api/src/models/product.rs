//! Product domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mangomart_core::ProductId;

/// A catalog product.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    /// Store-assigned product ID.
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Decimal,
    /// Average customer rating, 0 when unrated.
    pub rating: f64,
    pub image_url: Option<String>,
    /// Whether the product is part of the current flash sale.
    pub flash_sale: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for inserting a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub price: Decimal,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub flash_sale: bool,
}
