/**
 * Error Conversion
 *
 * This module provides conversion implementations for API errors: the
 * `IntoResponse` impl that turns an `ApiError` into a status + JSON body,
 * and `From` impls for the error types of the services an error can
 * originate from (storage, token signing, password hashing).
 *
 * # Response Format
 *
 * Validation-style failures render as `{"errors": [{"msg", "param"?}]}`;
 * everything else renders as `{"msg": "..."}`.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::auth::tokens::TokenError;
use crate::error::types::{messages, ApiError, FieldError};
use crate::storage::StoreError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, json!({ "errors": errors }))
            }
            ApiError::Conflict(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "errors": [{ "msg": msg }] }),
            ),
            ApiError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                json!({ "errors": [{ "msg": messages::INVALID_CREDENTIALS }] }),
            ),
            ApiError::NoToken => (StatusCode::UNAUTHORIZED, json!({ "msg": messages::NO_TOKEN })),
            ApiError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                json!({ "msg": messages::INVALID_TOKEN }),
            ),
            ApiError::MalformedBody => (
                StatusCode::BAD_REQUEST,
                json!({ "msg": messages::INVALID_BODY }),
            ),
            ApiError::NotFound(msg) => (StatusCode::BAD_REQUEST, json!({ "msg": msg })),
            ApiError::Upstream => (StatusCode::NOT_FOUND, json!({ "msg": messages::NOT_FOUND })),
            ApiError::Internal(detail) => {
                // Log the detail server-side; never leak it to the client
                tracing::error!("request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "msg": messages::SERVER_ERROR }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            // A uniqueness violation raced past the pre-insert existence
            // check; surface it as the same conflict the check produces.
            StoreError::Duplicate("email") => ApiError::Conflict(messages::USER_EXISTS),
            other => ApiError::internal(other),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(cause) => ApiError::internal(cause),
            TokenError::Invalid => ApiError::InvalidToken,
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::internal(err)
    }
}

impl From<Vec<FieldError>> for ApiError {
    fn from(errors: Vec<FieldError>) -> Self {
        ApiError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_renders_errors_array() {
        let err = ApiError::Validation(vec![FieldError {
            msg: "Name is required".to_string(),
            param: Some("name"),
        }]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["msg"], "Name is required");
        assert_eq!(body["errors"][0]["param"], "name");
    }

    #[tokio::test]
    async fn missing_resource_is_400_not_404() {
        let response = ApiError::NotFound(messages::PROFILE_NOT_FOUND).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["msg"], "Profile not found");
    }

    #[tokio::test]
    async fn internal_detail_is_not_leaked() {
        let response = ApiError::internal("connection refused").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["msg"], messages::SERVER_ERROR);
    }

    #[tokio::test]
    async fn malformed_body_is_400_with_json_message() {
        let response = ApiError::MalformedBody.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["msg"], messages::INVALID_BODY);
    }

    #[tokio::test]
    async fn upstream_maps_to_404() {
        let response = ApiError::Upstream.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_email_becomes_conflict() {
        let err: ApiError = StoreError::Duplicate("email").into();
        assert!(matches!(err, ApiError::Conflict(messages::USER_EXISTS)));
    }
}
