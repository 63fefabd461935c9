/**
 * Profile Field Assembly
 *
 * Turns the raw upsert request body into the set of fields to write.
 * Only present, non-blank values count: a field omitted from the body is
 * left untouched on an existing profile, while the social mapping is
 * rebuilt wholesale from whatever keys the request carries (so dropping
 * a link requires resending the others).
 */

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{Profile, SocialLinks};

/// Upsert request body (`POST /api/profile`). Skills arrive as a single
/// comma-separated string.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileRequest {
    pub breed: Option<String>,
    pub website: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

/// The validated, normalized set of fields an upsert will write
#[derive(Debug, Clone)]
pub struct ProfileFields {
    pub breed: Option<String>,
    pub website: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub social: SocialLinks,
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Build the field set from a request, keeping only non-blank values.
/// The skills string is split on commas and each tag trimmed.
///
/// Whitespace-only values are deliberately normalized to absent, the
/// same as an omitted key: an upsert can never overwrite a stored field
/// with padding. Values that do count are stored untrimmed.
pub fn build_fields(request: &ProfileRequest) -> ProfileFields {
    let skills = present(&request.skills)
        .map(|s| s.split(',').map(|tag| tag.trim().to_string()).collect());

    ProfileFields {
        breed: present(&request.breed),
        website: present(&request.website),
        status: present(&request.status),
        location: present(&request.location),
        bio: present(&request.bio),
        skills,
        social: SocialLinks {
            youtube: present(&request.youtube),
            facebook: present(&request.facebook),
            twitter: present(&request.twitter),
            instagram: present(&request.instagram),
            linkedin: present(&request.linkedin),
        },
    }
}

impl ProfileFields {
    /// Merge into an existing profile. Present scalars overwrite, absent
    /// ones are kept; the social mapping is replaced entirely.
    pub fn merge_into(self, profile: &mut Profile) {
        if self.breed.is_some() {
            profile.breed = self.breed;
        }
        if self.website.is_some() {
            profile.website = self.website;
        }
        if self.status.is_some() {
            profile.status = self.status;
        }
        if self.location.is_some() {
            profile.location = self.location;
        }
        if self.bio.is_some() {
            profile.bio = self.bio;
        }
        if let Some(skills) = self.skills {
            profile.skills = skills;
        }
        profile.social = self.social;
        profile.updated_at = Utc::now();
    }

    /// Materialize a fresh profile for a user with no existing one
    pub fn into_profile(self, user_id: Uuid) -> Profile {
        let mut profile = Profile::empty(user_id);
        self.merge_into(&mut profile);
        profile
    }
}
