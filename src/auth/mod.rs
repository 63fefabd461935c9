//! # Authentication Module
//!
//! Account creation, credential verification, and stateless sessions.
//!
//! # Architecture
//!
//! Sessions are carried entirely by a signed JWT in the `x-auth-token`
//! header; the server keeps no session state. Passwords are bcrypt-hashed
//! before storage, and every account gets a Gravatar-derived avatar at
//! registration.
//!
//! # Module Structure
//!
//! - **credentials** - bcrypt hashing and verification
//! - **tokens** - JWT issuance/verification and [`AuthConfig`]
//! - **avatar** - Gravatar URI derivation
//! - **handlers** - register / login / me endpoints

pub mod avatar;
pub mod credentials;
pub mod handlers;
pub mod tokens;

// Re-export the pieces the rest of the crate touches
pub use avatar::avatar_url;
pub use credentials::{hash_password, verify_password};
pub use tokens::{issue_token, verify_token, AuthConfig, TokenError, DEFAULT_TOKEN_TTL_SECS};
