/**
 * API Route Configuration
 *
 * Declares every `/api` endpoint and splits them into a public router
 * and a protected router carrying the auth middleware. The two are
 * merged: axum combines method routers for paths that appear in both
 * (e.g. `GET /api/auth` is protected while `POST /api/auth` is public).
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::auth::handlers::{login, me, register};
use crate::middleware::require_auth;
use crate::profile::handlers::{
    add_owner, add_vet, delete_profile, get_all_profiles, get_my_profile, get_profile_by_user,
    instagram_feed, remove_owner, remove_vet, upsert_profile,
};
use crate::server::state::AppState;

/// Build the `/api` routes.
///
/// # Public Routes
///
/// - `POST /api/users` - register
/// - `POST /api/auth` - login
/// - `GET /api/profile` - all profiles
/// - `GET /api/profile/user/{user_id}` - one user's profile
/// - `GET /api/profile/instagram/{username}` - proxied feed
///
/// # Protected Routes (x-auth-token)
///
/// - `GET /api/auth` - current user
/// - `GET /api/profile/me` - own profile
/// - `POST /api/profile` - upsert own profile
/// - `DELETE /api/profile` - delete profile and account
/// - `PUT /api/profile/owner`, `DELETE /api/profile/owner/{id}`
/// - `PUT /api/profile/vet`, `DELETE /api/profile/vet/{id}`
pub fn configure_api_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth", get(me))
        .route("/api/profile/me", get(get_my_profile))
        .route("/api/profile", post(upsert_profile).delete(delete_profile))
        .route("/api/profile/owner", put(add_owner))
        .route("/api/profile/owner/{id}", delete(remove_owner))
        .route("/api/profile/vet", put(add_vet))
        .route("/api/profile/vet/{id}", delete(remove_vet))
        .route_layer(from_fn_with_state(state, require_auth));

    let public = Router::new()
        .route("/api/users", post(register))
        .route("/api/auth", post(login))
        .route("/api/profile", get(get_all_profiles))
        .route("/api/profile/user/{user_id}", get(get_profile_by_user))
        .route("/api/profile/instagram/{username}", get(instagram_feed));

    protected.merge(public)
}
