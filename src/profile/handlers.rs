/**
 * Profile Handlers
 *
 * HTTP endpoints over the profile service: fetch (own / by user / all),
 * upsert, delete, Owner and Vet sub-entry management, and the Instagram
 * feed proxy. Validation runs before any storage work; the service layer
 * owns the merge and prepend semantics.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{messages, ApiError};
use crate::middleware::AuthUser;
use crate::models::{OwnerEntry, ProfileView, VetEntry};
use crate::profile::fields::{build_fields, ProfileRequest};
use crate::profile::service;
use crate::server::state::AppState;
use crate::validation::{exists, required, validate, JsonBody, Rule};

/// Owner sub-entry request (`PUT /api/profile/owner`)
#[derive(Debug, Deserialize)]
pub struct OwnerRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Vet sub-entry request (`PUT /api/profile/vet`)
#[derive(Debug, Deserialize)]
pub struct VetRequest {
    pub name: Option<String>,
    pub hospital: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

fn profile_rules() -> [Rule<ProfileRequest>; 2] {
    [
        Rule {
            param: "status",
            msg: "Status is required",
            check: |r| required(r.status.as_deref()),
        },
        Rule {
            param: "skills",
            msg: "Skills is required",
            check: |r| required(r.skills.as_deref()),
        },
    ]
}

fn owner_rules() -> [Rule<OwnerRequest>; 3] {
    [
        Rule {
            param: "name",
            msg: "Name is required",
            check: |r| required(r.name.as_deref()),
        },
        Rule {
            param: "title",
            msg: "Title is required",
            check: |r| required(r.title.as_deref()),
        },
        Rule {
            param: "from",
            msg: "From date is required",
            check: |r| exists(r.from.as_ref()),
        },
    ]
}

fn vet_rules() -> [Rule<VetRequest>; 3] {
    [
        Rule {
            param: "name",
            msg: "Name is required",
            check: |r| required(r.name.as_deref()),
        },
        Rule {
            param: "hospital",
            msg: "Hospital is required",
            check: |r| required(r.hospital.as_deref()),
        },
        Rule {
            param: "from",
            msg: "From date is required",
            check: |r| exists(r.from.as_ref()),
        },
    ]
}

/// `GET /api/profile/me` — the caller's own profile
pub async fn get_my_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ProfileView>, ApiError> {
    let view = service::fetch_by_user(state.store.as_ref(), user_id).await?;
    Ok(Json(view))
}

/// `POST /api/profile` — create or update the caller's profile
pub async fn upsert_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(request): JsonBody<ProfileRequest>,
) -> Result<Json<ProfileView>, ApiError> {
    validate(&request, &profile_rules())?;
    let fields = build_fields(&request);
    let view = service::upsert(state.store.as_ref(), fields, user_id).await?;
    Ok(Json(view))
}

/// `GET /api/profile` — all profiles, public
pub async fn get_all_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileView>>, ApiError> {
    let views = service::fetch_all(state.store.as_ref()).await?;
    Ok(Json(views))
}

/// `GET /api/profile/user/{user_id}` — one user's profile, public.
///
/// The id arrives as a raw string; a malformed id gets the same 400
/// "Profile not found" as a missing profile.
pub async fn get_profile_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileView>, ApiError> {
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| ApiError::NotFound(messages::PROFILE_NOT_FOUND))?;
    let view = service::fetch_by_user(state.store.as_ref(), user_id).await?;
    Ok(Json(view))
}

/// `DELETE /api/profile` — remove the caller's profile and account
pub async fn delete_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Value>, ApiError> {
    service::delete(state.store.as_ref(), user_id).await?;
    Ok(Json(json!({ "msg": messages::PROFILE_DELETED })))
}

/// `PUT /api/profile/owner` — prepend an owner entry
pub async fn add_owner(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(request): JsonBody<OwnerRequest>,
) -> Result<Json<ProfileView>, ApiError> {
    validate(&request, &owner_rules())?;

    let entry = OwnerEntry {
        id: Uuid::new_v4(),
        name: request.name.unwrap_or_default(),
        title: request.title.unwrap_or_default(),
        from: request.from,
        to: request.to,
        current: request.current,
        description: request.description,
    };

    let view = service::add_owner(state.store.as_ref(), entry, user_id).await?;
    Ok(Json(view))
}

/// `DELETE /api/profile/owner/{id}` — remove an owner entry
pub async fn remove_owner(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(entry_id): Path<String>,
) -> Result<Json<ProfileView>, ApiError> {
    let view = service::remove_owner(state.store.as_ref(), &entry_id, user_id).await?;
    Ok(Json(view))
}

/// `PUT /api/profile/vet` — prepend a vet entry
pub async fn add_vet(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(request): JsonBody<VetRequest>,
) -> Result<Json<ProfileView>, ApiError> {
    validate(&request, &vet_rules())?;

    let entry = VetEntry {
        id: Uuid::new_v4(),
        name: request.name.unwrap_or_default(),
        hospital: request.hospital.unwrap_or_default(),
        from: request.from,
        to: request.to,
        current: request.current,
        description: request.description,
    };

    let view = service::add_vet(state.store.as_ref(), entry, user_id).await?;
    Ok(Json(view))
}

/// `DELETE /api/profile/vet/{id}` — remove a vet entry
pub async fn remove_vet(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(entry_id): Path<String>,
) -> Result<Json<ProfileView>, ApiError> {
    let view = service::remove_vet(state.store.as_ref(), &entry_id, user_id).await?;
    Ok(Json(view))
}

/// `GET /api/profile/instagram/{username}` — proxied feed, public
pub async fn instagram_feed(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let body = state.feed.fetch(&username).await?;
    Ok(Json(body))
}
