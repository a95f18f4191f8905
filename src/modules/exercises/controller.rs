use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;
use uuid::Uuid;

use ironlog_core::{AppError, PaginationParams};
use ironlog_models::ExerciseId;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::exercises::model::{Exercise, PaginatedExercisesResponse};
use crate::modules::exercises::service::ExerciseService;
use crate::state::AppState;

/// List the exercise catalog
#[utoipa::path(
    get,
    path = "/exercises",
    params(PaginationParams),
    responses((status = 200, description = "Exercises by name", body = PaginatedExercisesResponse)),
    tag = "Catalog"
)]
#[instrument(skip(state))]
pub async fn list_exercises(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedExercisesResponse>, AppError> {
    Ok(Json(ExerciseService::list(&state.db, params).await?))
}

#[utoipa::path(
    get,
    path = "/exercises/{id}",
    params(("id" = Uuid, Path, description = "Exercise ID")),
    responses(
        (status = 200, description = "Exercise", body = Exercise),
        (status = 404, description = "Exercise not found", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
#[instrument(skip(state))]
pub async fn get_exercise(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Exercise>, AppError> {
    Ok(Json(ExerciseService::get(&state.db, ExerciseId::from(id)).await?))
}

/// Find an exercise by name, ignoring case
#[utoipa::path(
    get,
    path = "/exercises/name/{name}",
    params(("name" = String, Path, description = "Exercise name")),
    responses(
        (status = 200, description = "Exercise", body = Exercise),
        (status = 404, description = "Exercise not found", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
#[instrument(skip(state))]
pub async fn get_exercise_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Exercise>, AppError> {
    Ok(Json(ExerciseService::get_by_name(&state.db, &name).await?))
}

/// List the exercises of a category
#[utoipa::path(
    get,
    path = "/exercises/category/{categoryName}",
    params(("categoryName" = String, Path, description = "Category name, case-insensitive")),
    responses(
        (status = 200, description = "Exercises in the category", body = Vec<Exercise>),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
#[instrument(skip(state))]
pub async fn list_exercises_by_category(
    State(state): State<AppState>,
    Path(category_name): Path<String>,
) -> Result<Json<Vec<Exercise>>, AppError> {
    Ok(Json(
        ExerciseService::list_by_category(&state.db, &category_name).await?,
    ))
}
