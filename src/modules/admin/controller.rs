use anyhow::anyhow;
use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;

use ironlog_core::{AppError, PaginationParams};
use ironlog_models::{
    AdminCreateWorkoutDto, Category, CategoryId, CreateCategoryDto, CreateExerciseDto, Exercise,
    ExerciseId, ExerciseImageResponse, MessageResponse, PaginatedExercisesResponse,
    PaginatedWorkoutsResponse, UnknownReferencesResponse, UpdateCategoryDto, UpdateExerciseDto,
    UpdateWorkoutDto, WorkoutId, WorkoutWithExercises,
};

use crate::middleware::role::AdminUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::categories::service::CategoryService;
use crate::modules::exercises::service::ExerciseService;
use crate::modules::workouts::controller::ensure_user_exists;
use crate::modules::workouts::service::WorkoutService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

pub const IMAGE_FIELD: &str = "image";

/// Multipart form of `POST /admin/exercises/{id}/image`.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageUploadForm {
    /// PNG, JPEG, WebP or GIF image
    #[schema(format = Binary)]
    pub image: String,
}

// Categories

#[utoipa::path(
    get,
    path = "/admin/categories",
    responses(
        (status = 200, description = "All categories", body = Vec<Category>),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Forbidden: Admins only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<Category>>, AppError> {
    Ok(Json(CategoryService::list(&state.db).await?))
}

#[utoipa::path(
    post,
    path = "/admin/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Validation failed or name taken", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Forbidden: Admins only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn create_category(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(dto): ValidatedJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let category = CategoryService::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    put,
    path = "/admin/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 400, description = "Validation failed or name taken", body = ErrorResponse),
        (status = 403, description = "Forbidden: Admins only", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn update_category(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCategoryDto>,
) -> Result<Json<Category>, AppError> {
    let category = CategoryService::update(&state.db, CategoryId::from(id), dto).await?;
    Ok(Json(category))
}

#[utoipa::path(
    delete,
    path = "/admin/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 400, description = "Category still has exercises", body = ErrorResponse),
        (status = 403, description = "Forbidden: Admins only", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn delete_category(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    CategoryService::delete(&state.db, CategoryId::from(id)).await?;
    Ok(Json(MessageResponse::new("Category deleted")))
}

// Exercises

#[utoipa::path(
    get,
    path = "/admin/exercises",
    params(PaginationParams),
    responses(
        (status = 200, description = "Exercises by name", body = PaginatedExercisesResponse),
        (status = 403, description = "Forbidden: Admins only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn list_exercises(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedExercisesResponse>, AppError> {
    Ok(Json(ExerciseService::list(&state.db, params).await?))
}

/// Add an exercise to the catalog
///
/// The category is named, not referenced by id; an unknown category is
/// rejected with its name in `details`.
#[utoipa::path(
    post,
    path = "/admin/exercises",
    request_body = CreateExerciseDto,
    responses(
        (status = 201, description = "Exercise created", body = Exercise),
        (status = 400, description = "Validation failed, unknown category or name taken", body = UnknownReferencesResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Forbidden: Admins only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn create_exercise(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(dto): ValidatedJson<CreateExerciseDto>,
) -> Result<(StatusCode, Json<Exercise>), AppError> {
    let exercise = ExerciseService::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(exercise)))
}

#[utoipa::path(
    put,
    path = "/admin/exercises/{id}",
    params(("id" = Uuid, Path, description = "Exercise ID")),
    request_body = UpdateExerciseDto,
    responses(
        (status = 200, description = "Exercise updated", body = Exercise),
        (status = 400, description = "Validation failed, unknown category or name taken", body = UnknownReferencesResponse),
        (status = 403, description = "Forbidden: Admins only", body = ErrorResponse),
        (status = 404, description = "Exercise not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn update_exercise(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateExerciseDto>,
) -> Result<Json<Exercise>, AppError> {
    let exercise = ExerciseService::update(&state.db, ExerciseId::from(id), dto).await?;
    Ok(Json(exercise))
}

#[utoipa::path(
    delete,
    path = "/admin/exercises/{id}",
    params(("id" = Uuid, Path, description = "Exercise ID")),
    responses(
        (status = 200, description = "Exercise deleted", body = MessageResponse),
        (status = 400, description = "Exercise is used by logged workouts", body = ErrorResponse),
        (status = 403, description = "Forbidden: Admins only", body = ErrorResponse),
        (status = 404, description = "Exercise not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn delete_exercise(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    ExerciseService::delete(&state.db, ExerciseId::from(id)).await?;
    Ok(Json(MessageResponse::new("Exercise deleted")))
}

/// Delete an exercise by name, ignoring case
#[utoipa::path(
    delete,
    path = "/admin/exercises/name/{name}",
    params(("name" = String, Path, description = "Exercise name")),
    responses(
        (status = 200, description = "Exercise deleted", body = MessageResponse),
        (status = 400, description = "Exercise is used by logged workouts", body = ErrorResponse),
        (status = 403, description = "Forbidden: Admins only", body = ErrorResponse),
        (status = 404, description = "Exercise not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn delete_exercise_by_name(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    ExerciseService::delete_by_name(&state.db, &name).await?;
    Ok(Json(MessageResponse::new("Exercise deleted")))
}

/// Upload an exercise image
///
/// Expects a multipart form with a single `image` file field.
#[utoipa::path(
    post,
    path = "/admin/exercises/{id}/image",
    params(("id" = Uuid, Path, description = "Exercise ID")),
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = ExerciseImageResponse),
        (status = 400, description = "No image, unsupported type or too large", body = ErrorResponse),
        (status = 403, description = "Forbidden: Admins only", body = ErrorResponse),
        (status = 404, description = "Exercise not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, multipart))]
pub async fn upload_exercise_image(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ExerciseImageResponse>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(anyhow!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::bad_request(anyhow!("Failed to read upload: {}", e)))?;
        upload = Some((content_type, bytes));
        break;
    }

    let (content_type, bytes) =
        upload.ok_or_else(|| AppError::bad_request(anyhow!("No image file provided")))?;

    let exercise = ExerciseService::upload_image(
        &state.db,
        state.storage.as_ref(),
        ExerciseId::from(id),
        &content_type,
        &bytes,
    )
    .await?;

    Ok(Json(ExerciseImageResponse {
        message: "Image uploaded successfully".to_string(),
        exercise,
    }))
}

// Workouts

#[utoipa::path(
    get,
    path = "/admin/workouts",
    params(PaginationParams),
    responses(
        (status = 200, description = "Workouts of every user, newest first", body = PaginatedWorkoutsResponse),
        (status = 403, description = "Forbidden: Admins only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn list_workouts(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedWorkoutsResponse>, AppError> {
    Ok(Json(WorkoutService::list(&state.db, None, params).await?))
}

/// Log a workout for any existing user
#[utoipa::path(
    post,
    path = "/admin/workouts",
    request_body = AdminCreateWorkoutDto,
    responses(
        (status = 201, description = "Workout logged", body = WorkoutWithExercises),
        (status = 400, description = "Validation failed, unknown user or unknown exercise IDs", body = UnknownReferencesResponse),
        (status = 403, description = "Forbidden: Admins only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, dto))]
pub async fn create_workout(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(dto): ValidatedJson<AdminCreateWorkoutDto>,
) -> Result<(StatusCode, Json<WorkoutWithExercises>), AppError> {
    let owner = dto.user_id;
    ensure_user_exists(&state, owner).await?;

    let workout = WorkoutService::create(&state.db, owner, dto.into()).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

#[utoipa::path(
    put,
    path = "/admin/workouts/{id}",
    params(("id" = Uuid, Path, description = "Workout ID")),
    request_body = UpdateWorkoutDto,
    responses(
        (status = 200, description = "Workout updated", body = WorkoutWithExercises),
        (status = 400, description = "Validation failed or unknown exercise IDs", body = UnknownReferencesResponse),
        (status = 403, description = "Forbidden: Admins only", body = ErrorResponse),
        (status = 404, description = "Workout not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, dto))]
pub async fn update_workout(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateWorkoutDto>,
) -> Result<Json<WorkoutWithExercises>, AppError> {
    let workout = WorkoutService::replace(&state.db, WorkoutId::from(id), dto).await?;
    Ok(Json(workout))
}

#[utoipa::path(
    delete,
    path = "/admin/workouts/{id}",
    params(("id" = Uuid, Path, description = "Workout ID")),
    responses(
        (status = 200, description = "Workout deleted", body = MessageResponse),
        (status = 403, description = "Forbidden: Admins only", body = ErrorResponse),
        (status = 404, description = "Workout not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn delete_workout(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    WorkoutService::delete(&state.db, WorkoutId::from(id)).await?;
    Ok(Json(MessageResponse::new("Workout deleted")))
}
