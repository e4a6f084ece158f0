//! User domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use mangomart_core::{Email, Role, UserId};

/// A registered user.
///
/// Deliberately carries no password hash: the hash lives only in the
/// `users.password_hash` column and a dedicated repository lookup used by
/// login. Serializing a `User` can therefore never leak credentials, no
/// matter which endpoint returns it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address (unique per account).
    pub email: Email,
    /// Account role. New accounts start as `user`.
    pub role: Role,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_has_no_hash_field() {
        let user = User {
            id: UserId::new(1),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: Email::parse("ada@example.com").unwrap(),
            role: Role::User,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("password_hash"));
        assert_eq!(object["email"], "ada@example.com");
        assert_eq!(object["role"], "user");
    }
}
