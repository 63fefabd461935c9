/**
 * Current-User Handler
 *
 * Implements `GET /api/auth`. Returns the authenticated user's record
 * with the password hash stripped. Clients call this on startup to
 * validate a stored token and hydrate their session.
 */

use axum::{extract::State, response::Json};

use crate::error::{messages, ApiError};
use crate::middleware::AuthUser;
use crate::models::UserResponse;
use crate::server::state::AppState;

/// Current-user handler
///
/// # Errors
///
/// * `400` — the token's user no longer exists (deleted account)
/// * `500` — storage failure
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .store
        .find_user_by_id(user_id)
        .await?
        .ok_or(ApiError::NotFound(messages::USER_NOT_FOUND))?;

    Ok(Json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::avatar::avatar_url;
    use crate::models::User;
    use crate::server::state::test_support::test_state;
    use chrono::Utc;
    use uuid::Uuid;

    #[tokio::test]
    async fn returns_user_without_hash() {
        let state = test_state();
        let user = User {
            id: Uuid::new_v4(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$2b$10$hash".to_string(),
            avatar: avatar_url("a@x.com"),
            created_at: Utc::now(),
        };
        state.store.insert_user(&user).await.unwrap();

        let response = me(State(state), AuthUser(user.id)).await.unwrap();
        assert_eq!(response.email, "a@x.com");

        let json = serde_json::to_value(&response.0).unwrap();
        assert!(json.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn deleted_user_is_not_found() {
        let state = test_state();
        let err = me(State(state), AuthUser(Uuid::new_v4())).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
