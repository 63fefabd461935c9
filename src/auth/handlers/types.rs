/**
 * Authentication Handler Types
 *
 * Request and response types shared by the register, login, and me
 * handlers. Request fields are `Option` so that missing fields reach the
 * validation layer (which reports them per-field) instead of being
 * rejected wholesale by body deserialization.
 */

use serde::{Deserialize, Serialize};

/// Registration request (`POST /api/users`)
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request (`POST /api/auth`)
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Returned by both register and login on success
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// Signed session token; send back in the `x-auth-token` header
    pub token: String,
}
