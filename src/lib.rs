//! Pooch Depot - Main Library
//!
//! Pooch Depot is a REST backend for a pet-profile social service:
//! account registration and login with stateless JWT sessions, profile
//! CRUD with nested time-boxed Owner/Vet entries, and a proxied
//! Instagram feed.
//!
//! # Overview
//!
//! Requests flow through three layers:
//!
//! 1. **Routes and middleware** - path declarations and token auth
//! 2. **Handlers** - validation and HTTP translation
//! 3. **Services and storage** - domain semantics over the abstract
//!    [`storage::Store`] trait (PostgreSQL in production, in-memory in
//!    tests)
//!
//! # Module Structure
//!
//! - **`server`** - configuration, shared state, app assembly
//! - **`routes`** - route declarations
//! - **`middleware`** - `x-auth-token` authentication
//! - **`auth`** - registration, login, hashing, tokens, avatars
//! - **`profile`** - profile CRUD, sub-entries, feed proxy
//! - **`validation`** - declarative per-field request validation
//! - **`storage`** - the persistence seam and its implementations
//! - **`models`** - domain and wire types
//! - **`error`** - the error taxonomy and HTTP mapping

pub mod auth;
pub mod error;
pub mod middleware;
pub mod models;
pub mod profile;
pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;
