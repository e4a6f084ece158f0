//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::token::TokenError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A user with this email is already registered.
    #[error("user already exists")]
    DuplicateUser,

    /// Invalid credentials (wrong password or user not found).
    ///
    /// A single variant on purpose: callers cannot distinguish "no such
    /// user" from "wrong password", so responses cannot be used to
    /// enumerate accounts.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Invalid email format at registration.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] mangomart_core::EmailError),

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// A required registration field was empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Token issuance error.
    #[error("token error: {0}")]
    Token(#[from] TokenError),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
