/**
 * User Model
 *
 * Identity record created on registration. The email is the uniqueness
 * key (matched case-sensitively, exactly as supplied at registration),
 * and the avatar URI is derived deterministically from the email at
 * creation time. The password hash never leaves the server: all wire
 * types here exclude it.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored user record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique key)
    pub email: String,
    /// bcrypt password hash
    pub password_hash: String,
    /// Gravatar URI derived from the email
    pub avatar: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// User data safe to return to clients (no password hash)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_excludes_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$2b$10$secret".to_string(),
            avatar: "https://www.gravatar.com/avatar/abc".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "a@x.com");
    }
}
