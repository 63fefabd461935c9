//! # Routes Module
//!
//! HTTP route declarations, kept separate from handler logic.
//!
//! - **router** - top-level router assembly ([`router::create_router`])
//! - **api_routes** - `/api` endpoints, public and token-protected

pub mod api_routes;
pub mod router;

pub use router::create_router;
