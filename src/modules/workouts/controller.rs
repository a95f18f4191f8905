use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use ironlog_auth::check_owner;
use ironlog_core::{AppError, PaginationParams};
use ironlog_models::{MessageResponse, UserId, WorkoutId};

use crate::metrics::track_authorization_denied;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::service::UserService;
use crate::modules::workouts::model::{
    CreateWorkoutDto, PaginatedWorkoutsResponse, UnknownReferencesResponse, UpdateWorkoutDto,
    WorkoutWithExercises,
};
use crate::modules::workouts::service::WorkoutService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

pub const INVALID_USER_ID: &str = "Invalid user ID";

/// Fails with an unknown-reference rejection naming `user_id` when no such
/// account exists.
pub(crate) async fn ensure_user_exists(state: &AppState, user_id: UserId) -> Result<(), AppError> {
    if UserService::exists(&state.db, user_id).await? {
        return Ok(());
    }
    Err(AppError::validation(INVALID_USER_ID, json!([user_id.to_string()])))
}

/// List the caller's workouts
#[utoipa::path(
    get,
    path = "/users/workouts",
    params(PaginationParams),
    responses(
        (status = 200, description = "Workouts, newest first", body = PaginatedWorkoutsResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Workouts"
)]
#[instrument(skip(state))]
pub async fn list_workouts(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedWorkoutsResponse>, AppError> {
    let owner = UserId::from(auth_user.user_id());
    let workouts = WorkoutService::list(&state.db, Some(owner), params).await?;
    Ok(Json(workouts))
}

/// Log a workout
///
/// `userId` defaults to the caller. Only admins may log a workout for
/// another account.
#[utoipa::path(
    post,
    path = "/users/workouts",
    request_body = CreateWorkoutDto,
    responses(
        (status = 201, description = "Workout logged", body = WorkoutWithExercises),
        (status = 400, description = "Validation failed or unknown exercise IDs", body = UnknownReferencesResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "userId names another account", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Workouts"
)]
#[instrument(skip(state, dto))]
pub async fn create_workout(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateWorkoutDto>,
) -> Result<(StatusCode, Json<WorkoutWithExercises>), AppError> {
    let owner = dto
        .user_id
        .unwrap_or_else(|| UserId::from(auth_user.user_id()));

    if owner.into_inner() != auth_user.user_id() {
        check_owner(&auth_user.0, owner.into_inner())
            .inspect_err(|_| track_authorization_denied("ownership"))?;
        ensure_user_exists(&state, owner).await?;
    }

    let workout = WorkoutService::create(&state.db, owner, dto.into()).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

/// Get one of the caller's workouts
#[utoipa::path(
    get,
    path = "/users/workouts/{id}",
    params(("id" = Uuid, Path, description = "Workout ID")),
    responses(
        (status = 200, description = "Workout with its exercise rows", body = WorkoutWithExercises),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Workout belongs to another user", body = ErrorResponse),
        (status = 404, description = "Workout not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Workouts"
)]
#[instrument(skip(state))]
pub async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkoutWithExercises>, AppError> {
    let workout = WorkoutService::get(&state.db, WorkoutId::from(id)).await?;
    Ok(Json(workout))
}

/// Replace one of the caller's workouts
#[utoipa::path(
    put,
    path = "/users/workouts/{id}",
    params(("id" = Uuid, Path, description = "Workout ID")),
    request_body = UpdateWorkoutDto,
    responses(
        (status = 200, description = "Workout updated", body = WorkoutWithExercises),
        (status = 400, description = "Validation failed or unknown exercise IDs", body = UnknownReferencesResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Workout belongs to another user", body = ErrorResponse),
        (status = 404, description = "Workout not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Workouts"
)]
#[instrument(skip(state, dto))]
pub async fn update_workout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateWorkoutDto>,
) -> Result<Json<WorkoutWithExercises>, AppError> {
    let workout = WorkoutService::replace(&state.db, WorkoutId::from(id), dto).await?;
    Ok(Json(workout))
}

/// Delete one of the caller's workouts
#[utoipa::path(
    delete,
    path = "/users/workouts/{id}",
    params(("id" = Uuid, Path, description = "Workout ID")),
    responses(
        (status = 200, description = "Workout deleted", body = MessageResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Workout belongs to another user", body = ErrorResponse),
        (status = 404, description = "Workout not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Workouts"
)]
#[instrument(skip(state))]
pub async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    WorkoutService::delete(&state.db, WorkoutId::from(id)).await?;
    Ok(Json(MessageResponse::new("Workout deleted successfully")))
}
