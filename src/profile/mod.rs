//! # Profile Module
//!
//! Profile CRUD, nested Owner/Vet sub-entries, and the Instagram feed
//! proxy.
//!
//! # Architecture
//!
//! Handlers validate and translate HTTP; the service layer owns the
//! domain semantics (merge, prepend, positional delete) against the
//! abstract [`crate::storage::Store`]; field assembly normalizes the
//! loose upsert body into a typed change set.
//!
//! # Module Structure
//!
//! - **fields** - upsert body → [`fields::ProfileFields`] assembly
//! - **service** - storage-backed operations, joins user display data
//! - **handlers** - HTTP endpoints
//! - **feed** - upstream Instagram feed client

pub mod feed;
pub mod fields;
pub mod handlers;
pub mod service;

pub use feed::{FeedClient, FeedConfig};
pub use fields::{build_fields, ProfileFields, ProfileRequest};
