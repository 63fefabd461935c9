/**
 * Profile Service
 *
 * The operations behind the profile endpoints, expressed against the
 * [`Store`] trait. Partial updates are read-merge-write: the document is
 * fetched, mutated in Rust, and written back whole. That sequence is not
 * atomic across concurrent requests to the same profile — the store's
 * upsert prevents duplicate documents but not lost updates.
 */

use uuid::Uuid;

use crate::error::{messages, ApiError};
use crate::models::{OwnerEntry, Profile, ProfileView, VetEntry};
use crate::profile::fields::ProfileFields;
use crate::storage::Store;

/// Join the owning user's display data into a view.
///
/// Fails with 400 "Profile not found" if the user record has gone
/// missing, which only happens if deletion raced the read.
async fn expand(store: &dyn Store, profile: Profile) -> Result<ProfileView, ApiError> {
    let user = store
        .find_user_by_id(profile.user_id)
        .await?
        .ok_or(ApiError::NotFound(messages::PROFILE_NOT_FOUND))?;
    Ok(ProfileView::new(profile, &user))
}

/// Fetch one user's profile, expanded with their name and avatar
pub async fn fetch_by_user(store: &dyn Store, user_id: Uuid) -> Result<ProfileView, ApiError> {
    let profile = store
        .find_profile(user_id)
        .await?
        .ok_or(ApiError::NotFound(messages::PROFILE_NOT_FOUND))?;
    expand(store, profile).await
}

/// Fetch every profile. Profiles whose user record is missing are
/// skipped with a warning rather than failing the whole listing.
pub async fn fetch_all(store: &dyn Store) -> Result<Vec<ProfileView>, ApiError> {
    let profiles = store.all_profiles().await?;
    let mut views = Vec::with_capacity(profiles.len());

    for profile in profiles {
        match store.find_user_by_id(profile.user_id).await? {
            Some(user) => views.push(ProfileView::new(profile, &user)),
            None => {
                tracing::warn!("skipping orphaned profile for user {}", profile.user_id);
            }
        }
    }

    Ok(views)
}

/// Create or update the caller's profile from an assembled field set
pub async fn upsert(
    store: &dyn Store,
    fields: ProfileFields,
    user_id: Uuid,
) -> Result<ProfileView, ApiError> {
    // Not atomic: two concurrent upserts can lose one set of scalars
    let profile = match store.find_profile(user_id).await? {
        Some(mut existing) => {
            fields.merge_into(&mut existing);
            existing
        }
        None => fields.into_profile(user_id),
    };

    store.upsert_profile(&profile).await?;
    expand(store, profile).await
}

/// Delete the caller's profile and account
pub async fn delete(store: &dyn Store, user_id: Uuid) -> Result<(), ApiError> {
    store.delete_profile(user_id).await?;
    store.delete_user(user_id).await?;
    tracing::info!("deleted profile and account for user {}", user_id);
    Ok(())
}

async fn load_own_profile(store: &dyn Store, user_id: Uuid) -> Result<Profile, ApiError> {
    store
        .find_profile(user_id)
        .await?
        .ok_or(ApiError::NotFound(messages::PROFILE_NOT_FOUND))
}

async fn save_and_expand(
    store: &dyn Store,
    profile: Profile,
) -> Result<ProfileView, ApiError> {
    store.upsert_profile(&profile).await?;
    expand(store, profile).await
}

/// Prepend an owner entry to the caller's profile
pub async fn add_owner(
    store: &dyn Store,
    entry: OwnerEntry,
    user_id: Uuid,
) -> Result<ProfileView, ApiError> {
    let mut profile = load_own_profile(store, user_id).await?;
    profile.owners.insert(0, entry);
    save_and_expand(store, profile).await
}

/// Remove an owner entry by id.
///
/// A well-formed id that matches nothing is a silent no-op: the profile
/// is returned unchanged with 200. A malformed id is 400.
pub async fn remove_owner(
    store: &dyn Store,
    entry_id: &str,
    user_id: Uuid,
) -> Result<ProfileView, ApiError> {
    let entry_id = Uuid::parse_str(entry_id)
        .map_err(|_| ApiError::NotFound(messages::PROFILE_NOT_FOUND))?;

    let mut profile = load_own_profile(store, user_id).await?;
    profile.owners.retain(|e| e.id != entry_id);
    save_and_expand(store, profile).await
}

/// Prepend a vet entry to the caller's profile
pub async fn add_vet(
    store: &dyn Store,
    entry: VetEntry,
    user_id: Uuid,
) -> Result<ProfileView, ApiError> {
    let mut profile = load_own_profile(store, user_id).await?;
    profile.vets.insert(0, entry);
    save_and_expand(store, profile).await
}

/// Remove a vet entry by id; same no-op/400 contract as [`remove_owner`]
pub async fn remove_vet(
    store: &dyn Store,
    entry_id: &str,
    user_id: Uuid,
) -> Result<ProfileView, ApiError> {
    let entry_id = Uuid::parse_str(entry_id)
        .map_err(|_| ApiError::NotFound(messages::PROFILE_NOT_FOUND))?;

    let mut profile = load_own_profile(store, user_id).await?;
    profile.vets.retain(|e| e.id != entry_id);
    save_and_expand(store, profile).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::profile::fields::{build_fields, ProfileRequest};
    use crate::storage::MemoryStore;
    use chrono::Utc;

    async fn seed_user(store: &MemoryStore) -> Uuid {
        let user = User {
            id: Uuid::new_v4(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
            avatar: "avatar".to_string(),
            created_at: Utc::now(),
        };
        store.insert_user(&user).await.unwrap();
        user.id
    }

    fn fields(status: &str, skills: &str) -> ProfileFields {
        build_fields(&ProfileRequest {
            status: Some(status.to_string()),
            skills: Some(skills.to_string()),
            ..ProfileRequest::default()
        })
    }

    fn owner(name: &str) -> OwnerEntry {
        OwnerEntry {
            id: Uuid::new_v4(),
            name: name.to_string(),
            title: "Owner".to_string(),
            from: None,
            to: None,
            current: false,
            description: None,
        }
    }

    #[tokio::test]
    async fn upsert_creates_then_merges() {
        let store = MemoryStore::new();
        let user_id = seed_user(&store).await;

        let created = upsert(&store, fields("Breeder", "go,rust"), user_id)
            .await
            .unwrap();
        assert_eq!(created.status.as_deref(), Some("Breeder"));
        assert_eq!(created.skills, vec!["go".to_string(), "rust".to_string()]);

        let updated = upsert(&store, fields("Walker", "js"), user_id)
            .await
            .unwrap();
        assert_eq!(updated.status.as_deref(), Some("Walker"));
        assert_eq!(updated.skills, vec!["js".to_string()]);
    }

    #[tokio::test]
    async fn fetch_by_user_without_profile_is_not_found() {
        let store = MemoryStore::new();
        let user_id = seed_user(&store).await;

        let err = fetch_by_user(&store, user_id).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::NotFound(messages::PROFILE_NOT_FOUND)
        ));
    }

    #[tokio::test]
    async fn fetch_all_skips_orphaned_profiles() {
        let store = MemoryStore::new();
        let user_id = seed_user(&store).await;
        upsert(&store, fields("Breeder", "go"), user_id).await.unwrap();

        // Orphan: profile without a user record
        store
            .upsert_profile(&Profile::empty(Uuid::new_v4()))
            .await
            .unwrap();

        let views = fetch_all(&store).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].user.id, user_id);
    }

    #[tokio::test]
    async fn delete_removes_profile_and_user() {
        let store = MemoryStore::new();
        let user_id = seed_user(&store).await;
        upsert(&store, fields("Breeder", "go"), user_id).await.unwrap();

        delete(&store, user_id).await.unwrap();

        assert!(store.find_profile(user_id).await.unwrap().is_none());
        assert!(store.find_user_by_id(user_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn owners_are_prepended() {
        let store = MemoryStore::new();
        let user_id = seed_user(&store).await;
        upsert(&store, fields("Breeder", "go"), user_id).await.unwrap();

        add_owner(&store, owner("first"), user_id).await.unwrap();
        let view = add_owner(&store, owner("second"), user_id).await.unwrap();

        assert_eq!(view.owners[0].name, "second");
        assert_eq!(view.owners[1].name, "first");
    }

    #[tokio::test]
    async fn add_owner_without_profile_is_not_found() {
        let store = MemoryStore::new();
        let user_id = seed_user(&store).await;

        let err = add_owner(&store, owner("first"), user_id).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn remove_owner_with_unknown_id_is_a_no_op() {
        let store = MemoryStore::new();
        let user_id = seed_user(&store).await;
        upsert(&store, fields("Breeder", "go"), user_id).await.unwrap();
        add_owner(&store, owner("first"), user_id).await.unwrap();

        let view = remove_owner(&store, &Uuid::new_v4().to_string(), user_id)
            .await
            .unwrap();
        assert_eq!(view.owners.len(), 1);
    }

    #[tokio::test]
    async fn remove_owner_with_malformed_id_is_rejected() {
        let store = MemoryStore::new();
        let user_id = seed_user(&store).await;
        upsert(&store, fields("Breeder", "go"), user_id).await.unwrap();

        let err = remove_owner(&store, "not-a-uuid", user_id).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::NotFound(messages::PROFILE_NOT_FOUND)
        ));
    }

    #[tokio::test]
    async fn remove_owner_deletes_the_matching_entry() {
        let store = MemoryStore::new();
        let user_id = seed_user(&store).await;
        upsert(&store, fields("Breeder", "go"), user_id).await.unwrap();

        let first = owner("first");
        let first_id = first.id;
        add_owner(&store, first, user_id).await.unwrap();
        add_owner(&store, owner("second"), user_id).await.unwrap();

        let view = remove_owner(&store, &first_id.to_string(), user_id)
            .await
            .unwrap();
        assert_eq!(view.owners.len(), 1);
        assert_eq!(view.owners[0].name, "second");
    }
}
