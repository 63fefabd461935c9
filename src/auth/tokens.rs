/**
 * Session Tokens
 *
 * JWT issuance and verification. Tokens are the only session mechanism —
 * nothing is persisted server-side. The claim payload nests the user id
 * under `user.id`, which is the shape the deployed clients already parse.
 *
 * The signing secret and TTL are injected via [`AuthConfig`], built once
 * at startup; nothing here reads the environment.
 */

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Default token lifetime in seconds (~100 hours)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 360_000;

/// Token signing configuration, constructed once at startup
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for HS256 signing
    pub jwt_secret: String,
    /// Seconds from issuance until a token expires
    pub token_ttl_secs: u64,
}

/// Token issuance/verification failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing failed; surfaces as a 500 to the client
    #[error("failed to sign token: {0}")]
    Signing(jsonwebtoken::errors::Error),

    /// Bad signature, expired, malformed, or a non-UUID id claim
    #[error("token is not valid")]
    Invalid,
}

/// The nested identity claim
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenUser {
    pub id: Uuid,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Asserted identity, nested as `{"user": {"id": ...}}`
    pub user: TokenUser,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Issue a signed token asserting `user_id`.
///
/// Synchronous from the caller's perspective: either returns the token
/// string or fails with [`TokenError::Signing`].
pub fn issue_token(user_id: Uuid, config: &AuthConfig) -> Result<String, TokenError> {
    let now = unix_now();
    let claims = Claims {
        user: TokenUser { id: user_id },
        iat: now,
        exp: now + config.token_ttl_secs,
    };

    let key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    encode(&Header::default(), &claims, &key).map_err(TokenError::Signing)
}

/// Verify a token and extract the asserted user id.
///
/// Fails with [`TokenError::Invalid`] if the signature does not match,
/// the token has expired, or the payload is malformed.
pub fn verify_token(token: &str, config: &AuthConfig) -> Result<Uuid, TokenError> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_ref());
    let data =
        decode::<Claims>(token, &key, &Validation::default()).map_err(|_| TokenError::Invalid)?;
    Ok(data.claims.user.id)
}
