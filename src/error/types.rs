/**
 * API Error Types
 *
 * This module defines the error taxonomy for the HTTP API. Every handler
 * returns `Result<_, ApiError>`, and each variant maps to a fixed HTTP
 * status and JSON body shape (see `conversion.rs`).
 *
 * # Status Mapping
 *
 * A historical quirk of the API is preserved on purpose: missing-resource
 * conditions ("Profile not found", "User not found") respond with 400, not
 * 404. Only the third-party feed proxy uses 404. Changing this would break
 * existing clients, so the mapping is documented here instead of fixed.
 */

use serde::Serialize;
use thiserror::Error;

/// User-facing message strings.
///
/// Centralized so that the login flow's deliberate message reuse (the same
/// "Invalid Credentials" text for both unknown email and wrong password)
/// stays in one place.
pub mod messages {
    pub const SERVER_ERROR: &str = "Server Error";
    pub const USER_EXISTS: &str = "User already exists";
    pub const NO_TOKEN: &str = "No token, authorization denied";
    pub const INVALID_TOKEN: &str = "Token is not valid";
    pub const INVALID_CREDENTIALS: &str = "Invalid Credentials";
    pub const PROFILE_NOT_FOUND: &str = "Profile not found";
    pub const INVALID_BODY: &str = "Invalid request body";
    pub const PROFILE_DELETED: &str = "Profile deleted";
    pub const USER_NOT_FOUND: &str = "User not found";
    pub const NOT_FOUND: &str = "Not found";
}

/// A single per-field validation failure.
///
/// Serialized into the `{"errors": [...]}` body. `param` names the field
/// that failed; conflict-style errors omit it.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// Human-readable message for this failure
    pub msg: String,
    /// Name of the offending request field, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<&'static str>,
}

/// All errors a request can surface to a client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more request fields failed validation (400, `{"errors": [...]}`)
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// A uniqueness conflict, e.g. registering an existing email
    /// (400, `{"errors": [{"msg": ...}]}`)
    #[error("{0}")]
    Conflict(&'static str),

    /// Login failed. Unknown email and wrong password intentionally share
    /// this variant so the response cannot reveal which check failed
    /// (400, `{"errors": [{"msg": "Invalid Credentials"}]}`)
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No `x-auth-token` header on a protected route (401, `{"msg": ...}`)
    #[error("no auth token")]
    NoToken,

    /// The supplied token failed verification (401, `{"msg": ...}`)
    #[error("auth token is not valid")]
    InvalidToken,

    /// The request body could not be parsed as JSON (400, `{"msg": ...}`).
    /// Produced by the [`crate::validation::JsonBody`] extractor so that
    /// even parse failures answer with the API's JSON error shape.
    #[error("malformed request body")]
    MalformedBody,

    /// A referenced resource does not exist (400, `{"msg": ...}` — see the
    /// module docs for why this is not 404)
    #[error("{0}")]
    NotFound(&'static str),

    /// The third-party feed API returned a non-200 response (404)
    #[error("upstream request failed")]
    Upstream,

    /// Anything unexpected. The detail is logged server-side only; clients
    /// receive a generic 500 body.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create an internal error from any displayable cause
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        Self::Internal(cause.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_omits_absent_param() {
        let err = FieldError {
            msg: messages::USER_EXISTS.to_string(),
            param: None,
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({ "msg": "User already exists" }));
    }

    #[test]
    fn field_error_includes_param() {
        let err = FieldError {
            msg: "Name is required".to_string(),
            param: Some("name"),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["param"], "name");
    }
}
