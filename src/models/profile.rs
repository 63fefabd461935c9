/**
 * Profile Model
 *
 * The domain aggregate holding user-supplied biographical data, exactly
 * one per user (`user_id` is the uniqueness key). Nested sub-lists hold
 * time-boxed Owner and Vet entries; new entries are prepended, and each
 * carries a server-assigned id so it can be deleted positionally later.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::User;

/// Social link mapping. Keys are present in JSON only when supplied —
/// absent links are omitted, never serialized as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// A time-boxed ownership/experience entry nested in a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerEntry {
    /// Server-assigned entry id, used for positional delete
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A time-boxed veterinary/education entry nested in a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VetEntry {
    /// Server-assigned entry id, used for positional delete
    pub id: Uuid,
    pub name: String,
    pub hospital: String,
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A stored profile document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Owning user (uniqueness key — zero or one profile per user)
    pub user_id: Uuid,
    pub breed: Option<String>,
    pub website: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    /// Ordered skill tags
    pub skills: Vec<String>,
    pub social: SocialLinks,
    /// Ordered by insertion, newest first
    pub owners: Vec<OwnerEntry>,
    /// Ordered by insertion, newest first
    pub vets: Vec<VetEntry>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// An empty profile for a user, with no fields set
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            breed: None,
            website: None,
            status: None,
            location: None,
            bio: None,
            skills: Vec::new(),
            social: SocialLinks::default(),
            owners: Vec::new(),
            vets: Vec::new(),
            updated_at: Utc::now(),
        }
    }
}

/// The owning user's display data, joined into profile responses
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

/// A profile as returned over the wire: the stored document expanded with
/// the owning user's name and avatar.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub user: UserSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialLinks,
    pub owners: Vec<OwnerEntry>,
    pub vets: Vec<VetEntry>,
}

impl ProfileView {
    pub fn new(profile: Profile, user: &User) -> Self {
        Self {
            user: UserSummary {
                id: user.id,
                name: user.name.clone(),
                avatar: user.avatar.clone(),
            },
            breed: profile.breed,
            website: profile.website,
            status: profile.status,
            location: profile.location,
            bio: profile.bio,
            skills: profile.skills,
            social: profile.social,
            owners: profile.owners,
            vets: profile.vets,
        }
    }
}
