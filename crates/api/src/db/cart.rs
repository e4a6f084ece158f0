//! Cart repository for database operations.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::{CartItem, NewCartItem};

const CART_COLUMNS: &str = "id, user_email, product_id, name, price, image_url, created_at";

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a cart line.
    ///
    /// No dedup: adding the same product twice creates two rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn add(&self, item: &NewCartItem) -> Result<CartItem, RepositoryError> {
        let sql = format!(
            "INSERT INTO cart_items (user_email, product_id, name, price, image_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {CART_COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, CartItem>(&sql)
            .bind(&item.user_email)
            .bind(item.product_id)
            .bind(&item.name)
            .bind(item.price)
            .bind(&item.image_url)
            .fetch_one(self.pool)
            .await?;
        Ok(inserted)
    }

    /// List cart lines for a user email, oldest first.
    ///
    /// An unknown email returns an empty list.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_email: &str) -> Result<Vec<CartItem>, RepositoryError> {
        let sql = format!("SELECT {CART_COLUMNS} FROM cart_items WHERE user_email = $1 ORDER BY id");
        let items = sqlx::query_as::<_, CartItem>(&sql)
            .bind(user_email)
            .fetch_all(self.pool)
            .await?;
        Ok(items)
    }
}
