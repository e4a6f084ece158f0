//! Domain types for the API.
//!
//! These types are both the database row mapping (`sqlx::FromRow`) and the
//! JSON response shape - the schema is simple enough that a separate DTO
//! layer would only duplicate field lists.

pub mod cart;
pub mod page;
pub mod product;
pub mod user;

pub use cart::{CartItem, NewCartItem};
pub use page::{PAGE_SIZE, Page, PageQuery};
pub use product::{NewProduct, Product};
pub use user::User;
