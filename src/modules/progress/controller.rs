use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use ironlog_core::AppError;
use ironlog_models::{MessageResponse, ProgressLogId, UserId};

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::progress::model::{
    CreateProgressDto, PaginatedProgressResponse, ProgressFilterParams, ProgressLog,
    ProgressMetric, UpdateProgressDto,
};
use crate::modules::progress::service::ProgressService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List the caller's progress entries
#[utoipa::path(
    get,
    path = "/users/progress",
    params(
        ("metric" = Option<ProgressMetric>, Query, description = "Only return entries of this metric"),
        ("limit" = Option<i64>, Query, description = "Page size (1-100, default 10)"),
        ("offset" = Option<i64>, Query, description = "Items to skip"),
        ("page" = Option<i64>, Query, description = "Page number, 1-indexed")
    ),
    responses(
        (status = 200, description = "Progress entries, most recent first", body = PaginatedProgressResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Progress"
)]
#[instrument(skip(state))]
pub async fn list_progress(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(filters): Query<ProgressFilterParams>,
) -> Result<Json<PaginatedProgressResponse>, AppError> {
    let logs = ProgressService::list(&state.db, UserId::from(auth_user.user_id()), filters).await?;
    Ok(Json(logs))
}

/// Record a progress entry
#[utoipa::path(
    post,
    path = "/users/progress",
    request_body = CreateProgressDto,
    responses(
        (status = 201, description = "Progress recorded", body = ProgressLog),
        (status = 400, description = "Validation failed or unknown exercise", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Progress"
)]
#[instrument(skip(state, dto))]
pub async fn create_progress(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateProgressDto>,
) -> Result<(StatusCode, Json<ProgressLog>), AppError> {
    let log = ProgressService::create(&state.db, UserId::from(auth_user.user_id()), dto).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

#[utoipa::path(
    get,
    path = "/users/progress/{id}",
    params(("id" = Uuid, Path, description = "Progress log ID")),
    responses(
        (status = 200, description = "Progress entry", body = ProgressLog),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Entry belongs to another user", body = ErrorResponse),
        (status = 404, description = "Progress log not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Progress"
)]
#[instrument(skip(state))]
pub async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProgressLog>, AppError> {
    let log = ProgressService::get(&state.db, ProgressLogId::from(id)).await?;
    Ok(Json(log))
}

#[utoipa::path(
    put,
    path = "/users/progress/{id}",
    params(("id" = Uuid, Path, description = "Progress log ID")),
    request_body = UpdateProgressDto,
    responses(
        (status = 200, description = "Progress entry updated", body = ProgressLog),
        (status = 400, description = "Validation failed or unknown exercise", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Entry belongs to another user", body = ErrorResponse),
        (status = 404, description = "Progress log not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Progress"
)]
#[instrument(skip(state, dto))]
pub async fn update_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateProgressDto>,
) -> Result<Json<ProgressLog>, AppError> {
    let log = ProgressService::update(&state.db, ProgressLogId::from(id), dto).await?;
    Ok(Json(log))
}

#[utoipa::path(
    delete,
    path = "/users/progress/{id}",
    params(("id" = Uuid, Path, description = "Progress log ID")),
    responses(
        (status = 200, description = "Progress entry deleted", body = MessageResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Entry belongs to another user", body = ErrorResponse),
        (status = 404, description = "Progress log not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Progress"
)]
#[instrument(skip(state))]
pub async fn delete_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    ProgressService::delete(&state.db, ProgressLogId::from(id)).await?;
    Ok(Json(MessageResponse::new("Progress log deleted")))
}
