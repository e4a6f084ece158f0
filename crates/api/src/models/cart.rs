//! Cart domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mangomart_core::{CartItemId, Email, ProductId};

/// A cart line.
///
/// Product fields are copied at insertion time; `product_id` is a plain copy,
/// not a foreign key. Adding the same product twice creates two independent
/// rows - there is no quantity merging.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CartItem {
    pub id: CartItemId,
    /// Owning user's email address.
    pub user_email: Email,
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for adding a product to a cart.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCartItem {
    pub user_email: Email,
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cart_item_rejects_malformed_email() {
        let result: Result<NewCartItem, _> = serde_json::from_str(
            r#"{"user_email": "not-an-email", "product_id": 1, "name": "Mouse", "price": "19.99"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_new_cart_item_parses() {
        let item: NewCartItem = serde_json::from_str(
            r#"{"user_email": "a@b.com", "product_id": 7, "name": "Mouse", "price": "19.99"}"#,
        )
        .unwrap();
        assert_eq!(item.product_id, ProductId::new(7));
        assert!(item.image_url.is_none());
    }
}
