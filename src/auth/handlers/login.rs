/**
 * Login Handler
 *
 * Implements `POST /api/auth`.
 *
 * # Security
 *
 * An unknown email and a wrong password produce byte-identical 400
 * responses, so the endpoint cannot be used to probe which addresses
 * are registered.
 */

use axum::{extract::State, response::Json};

use crate::auth::credentials::verify_password;
use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::auth::tokens::issue_token;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::{exists, is_email, validate, JsonBody, Rule};

fn rules() -> [Rule<LoginRequest>; 2] {
    [
        Rule {
            param: "email",
            msg: "Please enter valid email",
            check: |r| is_email(r.email.as_deref()),
        },
        Rule {
            param: "password",
            msg: "Password is required",
            check: |r| exists(r.password.as_deref()),
        },
    ]
}

/// Login handler
///
/// # Errors
///
/// * `400` with `{"errors": [...]}` — validation failure or bad credentials
/// * `500` — storage, hashing, or signing failure
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    validate(&request, &rules())?;

    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    let Some(user) = state.store.find_user_by_email(&email).await? else {
        tracing::warn!("login failed, unknown email: {}", email);
        return Err(ApiError::InvalidCredentials);
    };

    if !verify_password(&password, &user.password_hash)? {
        tracing::warn!("login failed, wrong password for: {}", email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = issue_token(user.id, &state.auth)?;
    tracing::info!("user logged in: {}", user.email);

    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::avatar::avatar_url;
    use crate::auth::credentials::hash_password;
    use crate::auth::tokens::verify_token;
    use crate::models::User;
    use crate::server::state::test_support::test_state;
    use chrono::Utc;
    use uuid::Uuid;

    async fn seed_user(state: &AppState, email: &str, password: &str) -> Uuid {
        let user = User {
            id: Uuid::new_v4(),
            name: "A".to_string(),
            email: email.to_string(),
            password_hash: hash_password(password).unwrap(),
            avatar: avatar_url(email),
            created_at: Utc::now(),
        };
        state.store.insert_user(&user).await.unwrap();
        user.id
    }

    fn body(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn valid_credentials_yield_token_for_that_user() {
        let state = test_state();
        let id = seed_user(&state, "a@x.com", "secret1").await;

        let response = login(State(state.clone()), JsonBody(body("a@x.com", "secret1")))
            .await
            .unwrap();
        assert_eq!(verify_token(&response.token, &state.auth).unwrap(), id);
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_are_indistinguishable() {
        let state = test_state();
        seed_user(&state, "a@x.com", "secret1").await;

        let unknown = login(State(state.clone()), JsonBody(body("b@x.com", "secret1")))
            .await
            .unwrap_err();
        let wrong = login(State(state), JsonBody(body("a@x.com", "nope123")))
            .await
            .unwrap_err();

        assert!(matches!(unknown, ApiError::InvalidCredentials));
        assert!(matches!(wrong, ApiError::InvalidCredentials));
    }

    #[tokio::test]
    async fn missing_password_is_a_validation_error() {
        let state = test_state();
        let request = LoginRequest {
            email: Some("a@x.com".to_string()),
            password: None,
        };

        let err = login(State(state), JsonBody(request)).await.unwrap_err();
        let ApiError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors[0].msg, "Password is required");
    }
}
