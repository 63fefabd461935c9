//! Storage Module
//!
//! The persistence seam. Handlers and services talk to the object-safe
//! [`Store`] trait only; the document store behind it is an external
//! collaborator and its query language never leaks into core logic.
//! Partial updates are expressed as "merge the partial record in Rust,
//! then upsert the whole document", and sub-entry removal as "drop the
//! list elements matching an id" — both performed on the document before
//! it is written back.
//!
//! # Module Structure
//!
//! ```text
//! storage/
//! ├── mod.rs      - `Store` trait and `StoreError`
//! ├── postgres.rs - PostgreSQL implementation (sqlx, JSONB documents)
//! └── memory.rs   - In-memory implementation used by the test suite
//! ```
//!
//! # Implementations
//!
//! - [`PgStore`] — PostgreSQL via sqlx; profiles are stored one row per
//!   user with the nested sub-lists and social mapping as JSONB.
//! - [`MemoryStore`] — `RwLock`-guarded hash maps, for tests.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Profile, User};

/// In-memory implementation
pub mod memory;

/// PostgreSQL implementation
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors surfaced by a store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique key constraint was violated; the payload names the field
    #[error("duplicate value for unique field `{0}`")]
    Duplicate(&'static str),

    /// Any backend failure (connection, query, decode)
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Document-store operations the service layer depends on.
///
/// All methods are whole-document reads and writes. `upsert_profile` must
/// be atomic per document (create-if-absent, else replace) so the
/// one-profile-per-user invariant holds even under concurrent writers;
/// read-merge-write sequences built on top of it are not atomic and may
/// lose updates (documented on `profile::service::upsert`).
#[async_trait]
pub trait Store: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Insert a new user. Fails with `StoreError::Duplicate("email")` if
    /// the email is already taken.
    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;

    async fn delete_user(&self, id: Uuid) -> Result<(), StoreError>;

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError>;

    async fn all_profiles(&self) -> Result<Vec<Profile>, StoreError>;

    /// Create the profile if absent, otherwise replace it wholesale.
    async fn upsert_profile(&self, profile: &Profile) -> Result<(), StoreError>;

    async fn delete_profile(&self, user_id: Uuid) -> Result<(), StoreError>;
}
