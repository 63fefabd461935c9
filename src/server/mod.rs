//! # Server Module
//!
//! Startup plumbing: environment-driven configuration, shared
//! application state, and application assembly.
//!
//! # Module Structure
//!
//! - **config** - [`config::AppConfig`] loaded once from the environment
//! - **state** - [`state::AppState`] handed to every handler
//! - **init** - [`init::create_app`] wiring store, state, and router

pub mod config;
pub mod init;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use init::create_app;
pub use state::AppState;
