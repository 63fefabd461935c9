/**
 * Registration Handler
 *
 * Implements `POST /api/users`.
 *
 * # Registration Process
 *
 * 1. Validate name / email / password (declarative rules, aggregated)
 * 2. Reject if a user with this email already exists
 * 3. Derive the Gravatar avatar from the email (no network call)
 * 4. Hash the password (bcrypt, cost 10)
 * 5. Persist the user
 * 6. Issue a session token and return it
 *
 * # Security
 *
 * - Passwords are hashed before storage and never returned or logged
 * - The duplicate-email check and the store's unique key produce the
 *   same conflict response, so a race between them is not observable
 */

use axum::{extract::State, response::Json};
use chrono::Utc;
use uuid::Uuid;

use crate::auth::avatar::avatar_url;
use crate::auth::credentials::hash_password;
use crate::auth::handlers::types::{RegisterRequest, TokenResponse};
use crate::auth::tokens::issue_token;
use crate::error::{messages, ApiError};
use crate::models::User;
use crate::server::state::AppState;
use crate::validation::{is_email, min_length, required, validate, JsonBody, Rule};

fn rules() -> [Rule<RegisterRequest>; 3] {
    [
        Rule {
            param: "name",
            msg: "Name is required",
            check: |r| required(r.name.as_deref()),
        },
        Rule {
            param: "email",
            msg: "Please enter valid email",
            check: |r| is_email(r.email.as_deref()),
        },
        Rule {
            param: "password",
            msg: "Please enter a password with 6 or more characters",
            check: |r| min_length(r.password.as_deref(), 6),
        },
    ]
}

/// Register handler
///
/// # Errors
///
/// * `400` with `{"errors": [...]}` — validation failure or existing email
/// * `500` — hashing, storage, or signing failure
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    validate(&request, &rules())?;

    // Present after validation
    let name = request.name.unwrap_or_default();
    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    if state.store.find_user_by_email(&email).await?.is_some() {
        tracing::warn!("registration rejected, email already in use: {}", email);
        return Err(ApiError::Conflict(messages::USER_EXISTS));
    }

    let user = User {
        id: Uuid::new_v4(),
        name,
        avatar: avatar_url(&email),
        password_hash: hash_password(&password)?,
        email,
        created_at: Utc::now(),
    };

    state.store.insert_user(&user).await?;
    let token = issue_token(user.id, &state.auth)?;

    tracing::info!("user registered: {} ({})", user.name, user.email);

    Ok(Json(TokenResponse { token }))
}
