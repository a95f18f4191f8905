use axum::{Json, extract::State};
use tracing::instrument;

use ironlog_core::AppError;
use ironlog_models::UserId;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::AdminUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{MessageResponse, ProfileResponse};
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// Get the profile of the authenticated user
#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "User profile", body = ProfileResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = UserService::get_user(&state.db, UserId::from(auth_user.user_id())).await?;
    Ok(Json(user.into()))
}

/// Admin landing endpoint
#[utoipa::path(
    get,
    path = "/users/admin-dashboard",
    responses(
        (status = 200, description = "Caller is an admin", body = MessageResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Forbidden: Admins only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn admin_dashboard(AdminUser(admin): AdminUser) -> Json<MessageResponse> {
    tracing::debug!(user_id = %admin.user_id, "Admin dashboard opened");
    Json(MessageResponse::new("Welcome, Admin!"))
}
