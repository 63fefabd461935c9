/**
 * PostgreSQL Store
 *
 * `Store` implementation on top of sqlx. Profiles are stored as one row
 * per user: scalar columns for the free-text fields, a TEXT[] for skills,
 * and JSONB documents for the social mapping and both sub-entry lists.
 * `upsert_profile` uses `INSERT .. ON CONFLICT (user_id) DO UPDATE`, so
 * the zero-or-one-profile-per-user invariant holds under concurrent
 * writers.
 *
 * Model types never derive sqlx traits; private row structs in this file
 * are the only place the crate knows it is talking to PostgreSQL.
 */

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use async_trait::async_trait;

use crate::models::{OwnerEntry, Profile, SocialLinks, User, VetEntry};
use crate::storage::{Store, StoreError};

/// PostgreSQL-backed document store
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the database at `database_url`
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");
        Ok(Self { pool })
    }

    /// Run embedded migrations from `migrations/`
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    avatar: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            avatar: row.avatar,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    user_id: Uuid,
    breed: Option<String>,
    website: Option<String>,
    status: Option<String>,
    location: Option<String>,
    bio: Option<String>,
    skills: Vec<String>,
    social: Json<SocialLinks>,
    owners: Json<Vec<OwnerEntry>>,
    vets: Json<Vec<VetEntry>>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            user_id: row.user_id,
            breed: row.breed,
            website: row.website,
            status: row.status,
            location: row.location,
            bio: row.bio,
            skills: row.skills,
            social: row.social.0,
            owners: row.owners.0,
            vets: row.vets.0,
            updated_at: row.updated_at,
        }
    }
}

const USER_COLUMNS: &str = "id, name, email, password_hash, avatar, created_at";
const PROFILE_COLUMNS: &str =
    "user_id, breed, website, status, location, bio, skills, social, owners, vets, updated_at";

#[async_trait]
impl Store for PgStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let result = sqlx::query(
            "INSERT INTO users (id, name, email, password_hash, avatar, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.avatar)
        .bind(user.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db))
                if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                Err(StoreError::Duplicate("email"))
            }
            Err(other) => Err(other.into()),
        }
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Profile::from))
    }

    async fn all_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let rows = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY updated_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Profile::from).collect())
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO profiles
               (user_id, breed, website, status, location, bio, skills, social, owners, vets, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             ON CONFLICT (user_id) DO UPDATE SET
               breed = EXCLUDED.breed,
               website = EXCLUDED.website,
               status = EXCLUDED.status,
               location = EXCLUDED.location,
               bio = EXCLUDED.bio,
               skills = EXCLUDED.skills,
               social = EXCLUDED.social,
               owners = EXCLUDED.owners,
               vets = EXCLUDED.vets,
               updated_at = EXCLUDED.updated_at",
        )
        .bind(profile.user_id)
        .bind(&profile.breed)
        .bind(&profile.website)
        .bind(&profile.status)
        .bind(&profile.location)
        .bind(&profile.bio)
        .bind(&profile.skills)
        .bind(Json(&profile.social))
        .bind(Json(&profile.owners))
        .bind(Json(&profile.vets))
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_profile(&self, user_id: Uuid) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
