/**
 * Authentication Middleware
 *
 * Protects routes that require a signed-in user. Extracts the JWT from
 * the `x-auth-token` header, verifies it, and attaches the user id to
 * the request extensions for handlers to pick up via [`AuthUser`].
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::tokens::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Header carrying the session token
pub const AUTH_HEADER: &str = "x-auth-token";

/// Authenticated user id, attached to request extensions by [`require_auth`]
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub Uuid);

/// Authentication middleware
///
/// This middleware:
/// 1. Reads the token from the `x-auth-token` header
/// 2. Verifies signature and expiry
/// 3. Attaches [`AuthUser`] to request extensions for handlers
///
/// Returns 401 with `{"msg": ...}` if the token is missing or invalid.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTH_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("request without {} header", AUTH_HEADER);
            ApiError::NoToken
        })?;

    let user_id = verify_token(token, &state.auth).map_err(|e| {
        tracing::warn!("token rejected: {}", e);
        ApiError::InvalidToken
    })?;

    request.extensions_mut().insert(AuthUser(user_id));
    Ok(next.run(request).await)
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only present on routes behind require_auth
        parts.extensions.get::<AuthUser>().copied().ok_or_else(|| {
            tracing::warn!("AuthUser missing from request extensions");
            ApiError::NoToken
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    #[tokio::test]
    async fn extractor_reads_extension() {
        let user_id = Uuid::new_v4();
        let (mut parts, _) = HttpRequest::builder()
            .uri("http://example.com")
            .body(())
            .unwrap()
            .into_parts();
        parts.extensions.insert(AuthUser(user_id));

        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(extracted, user_id);
    }

    #[tokio::test]
    async fn extractor_rejects_without_extension() {
        let (mut parts, _) = HttpRequest::builder()
            .uri("http://example.com")
            .body(())
            .unwrap()
            .into_parts();

        let err = AuthUser::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NoToken));
    }
}
