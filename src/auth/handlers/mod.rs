//! # Authentication Handlers
//!
//! HTTP endpoints for the account lifecycle:
//!
//! - **register** - `POST /api/users`, create an account and sign in
//! - **login** - `POST /api/auth`, exchange credentials for a token
//! - **me** - `GET /api/auth`, resolve the token back to its user
//!
//! Register and login are public; `me` sits behind the auth middleware.
//! All three return JSON and map failures through [`crate::error::ApiError`].

pub mod login;
pub mod me;
pub mod register;
pub mod types;

// Re-export handlers for router registration
pub use login::login;
pub use me::me;
pub use register::register;
pub use types::{LoginRequest, RegisterRequest, TokenResponse};
