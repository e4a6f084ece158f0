//! Product repository for database operations.

use sqlx::PgPool;

use mangomart_core::ProductId;

use super::RepositoryError;
use crate::models::{PAGE_SIZE, NewProduct, Product};

const PRODUCT_COLUMNS: &str =
    "id, name, description, category, price, rating, image_url, flash_sale, created_at";

/// Filter applied to paginated product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductFilter {
    /// Every product.
    All,
    /// Only products with the flash-sale flag set.
    FlashSale,
}

impl ProductFilter {
    const fn where_clause(self) -> &'static str {
        match self {
            Self::All => "",
            Self::FlashSale => "WHERE flash_sale = TRUE",
        }
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let sql = format!(
            "INSERT INTO products (name, description, category, price, rating, image_url, flash_sale)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {PRODUCT_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Product>(&sql)
            .bind(&product.name)
            .bind(&product.description)
            .bind(&product.category)
            .bind(product.price)
            .bind(product.rating)
            .bind(&product.image_url)
            .bind(product.flash_sale)
            .fetch_one(self.pool)
            .await?;
        Ok(created)
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(product)
    }

    /// Fetch one page of products plus the total matching count.
    ///
    /// The unconditional listing has no ORDER BY - page contents follow
    /// storage order, which the listing contract leaves unspecified.
    /// A page past the end returns an empty `Vec`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either query fails.
    pub async fn page(
        &self,
        filter: ProductFilter,
        page: i64,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        let offset = (page - 1) * PAGE_SIZE;

        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products {} OFFSET $1 LIMIT $2",
            filter.where_clause()
        );
        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(offset)
            .bind(PAGE_SIZE)
            .fetch_all(self.pool)
            .await?;

        let count_sql = format!("SELECT COUNT(*) FROM products {}", filter.where_clause());
        let total: i64 = sqlx::query_scalar(&count_sql).fetch_one(self.pool).await?;

        Ok((products, total))
    }

    /// List every product sorted by rating, best first. No pagination.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn top_by_rating(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY rating DESC");
        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(self.pool)
            .await?;
        Ok(products)
    }

    /// Delete a product by ID.
    ///
    /// Returns the number of rows removed: 0 for a nonexistent ID, which is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
