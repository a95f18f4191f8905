use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use ironlog_auth::Role;
use ironlog_core::{PaginationMeta, PaginationParams};
use ironlog_models::{
    AdminCreateWorkoutDto, Category, CreateCategoryDto, CreateExerciseDto, CreateProgressDto,
    CreateWorkoutDto, Exercise, ExerciseImageResponse, LoginRequest, LoginResponse,
    MessageResponse, PaginatedExercisesResponse, PaginatedProgressResponse,
    PaginatedWorkoutsResponse, ProgressLog, ProgressMetric, SignupRequest, SignupResponse,
    UnknownReferencesResponse, UpdateCategoryDto, UpdateExerciseDto, UpdateProgressDto,
    UpdateWorkoutDto, User, WorkoutExercise, WorkoutExerciseInput, WorkoutWithExercises,
};

use crate::modules::admin::controller::ImageUploadForm;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::health::controller::{HealthResponse, WelcomeResponse};
use crate::modules::users::model::ProfileResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::welcome,
        crate::modules::health::controller::health_check,
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::login,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::admin_dashboard,
        crate::modules::workouts::controller::list_workouts,
        crate::modules::workouts::controller::create_workout,
        crate::modules::workouts::controller::get_workout,
        crate::modules::workouts::controller::update_workout,
        crate::modules::workouts::controller::delete_workout,
        crate::modules::progress::controller::list_progress,
        crate::modules::progress::controller::create_progress,
        crate::modules::progress::controller::get_progress,
        crate::modules::progress::controller::update_progress,
        crate::modules::progress::controller::delete_progress,
        crate::modules::categories::controller::list_categories,
        crate::modules::exercises::controller::list_exercises,
        crate::modules::exercises::controller::get_exercise,
        crate::modules::exercises::controller::get_exercise_by_name,
        crate::modules::exercises::controller::list_exercises_by_category,
        crate::modules::admin::controller::list_categories,
        crate::modules::admin::controller::create_category,
        crate::modules::admin::controller::update_category,
        crate::modules::admin::controller::delete_category,
        crate::modules::admin::controller::list_exercises,
        crate::modules::admin::controller::create_exercise,
        crate::modules::admin::controller::update_exercise,
        crate::modules::admin::controller::delete_exercise,
        crate::modules::admin::controller::delete_exercise_by_name,
        crate::modules::admin::controller::upload_exercise_image,
        crate::modules::admin::controller::list_workouts,
        crate::modules::admin::controller::create_workout,
        crate::modules::admin::controller::update_workout,
        crate::modules::admin::controller::delete_workout,
    ),
    components(
        schemas(
            Role,
            User,
            ProfileResponse,
            SignupRequest,
            SignupResponse,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            ErrorResponse,
            UnknownReferencesResponse,
            WelcomeResponse,
            HealthResponse,
            Category,
            CreateCategoryDto,
            UpdateCategoryDto,
            Exercise,
            CreateExerciseDto,
            UpdateExerciseDto,
            ExerciseImageResponse,
            ImageUploadForm,
            PaginatedExercisesResponse,
            WorkoutWithExercises,
            WorkoutExercise,
            WorkoutExerciseInput,
            CreateWorkoutDto,
            UpdateWorkoutDto,
            AdminCreateWorkoutDto,
            PaginatedWorkoutsResponse,
            ProgressLog,
            ProgressMetric,
            CreateProgressDto,
            UpdateProgressDto,
            PaginatedProgressResponse,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Authentication", description = "Signup and login"),
        (name = "Users", description = "The authenticated caller"),
        (name = "Workouts", description = "Workouts of the authenticated caller"),
        (name = "Progress", description = "Progress entries of the authenticated caller"),
        (name = "Catalog", description = "Public exercise catalog"),
        (name = "Admin", description = "Catalog and workout administration")
    ),
    info(
        title = "Ironlog API",
        version = "0.1.0",
        description = "Workout tracking REST API built with Rust, Axum and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
