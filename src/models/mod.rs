//! Data Models
//!
//! Storage-agnostic domain types. Nothing in here knows which persistence
//! backend is in use; the `storage` module maps these to and from its own
//! row/document representations.
//!
//! # Module Structure
//!
//! ```text
//! models/
//! ├── mod.rs      - Module exports
//! ├── user.rs     - User identity record
//! └── profile.rs  - Profile aggregate, sub-entries, wire views
//! ```

/// User identity record
pub mod user;

/// Profile aggregate and nested entries
pub mod profile;

// Re-export commonly used types
pub use profile::{OwnerEntry, Profile, ProfileView, SocialLinks, UserSummary, VetEntry};
pub use user::{User, UserResponse};
