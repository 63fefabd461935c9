//! Error Module
//!
//! This module defines the error taxonomy for the HTTP API and its
//! conversions to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - `ApiError`, `FieldError`, message strings
//! └── conversion.rs - `IntoResponse` and `From` implementations
//! ```
//!
//! # Propagation Policy
//!
//! Validation and auth failures are produced at the boundary, before any
//! business logic runs. Storage and service failures bubble up with `?`
//! and become a generic 500; the original detail is logged server-side.
//! There are no retries anywhere.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{messages, ApiError, FieldError};
