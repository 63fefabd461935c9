//! # Middleware Module
//!
//! Request-level concerns applied ahead of the handlers. Currently just
//! token authentication; see [`auth`].

pub mod auth;

pub use auth::{require_auth, AuthUser, AUTH_HEADER};
