use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};

use crate::modules::admin::controller::{
    create_category, create_exercise, create_workout, delete_category, delete_exercise,
    delete_exercise_by_name, delete_workout, list_categories, list_exercises, list_workouts,
    update_category, update_exercise, update_workout, upload_exercise_image,
};
use crate::state::AppState;

/// Extra room for multipart boundaries and headers around the file.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn init_admin_router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            put(update_category).delete(delete_category),
        )
        .route("/exercises", get(list_exercises).post(create_exercise))
        .route(
            "/exercises/{id}",
            put(update_exercise).delete(delete_exercise),
        )
        .route("/exercises/name/{name}", delete(delete_exercise_by_name))
        .route(
            "/exercises/{id}/image",
            post(upload_exercise_image)
                .layer(DefaultBodyLimit::max(max_upload_bytes + MULTIPART_OVERHEAD)),
        )
        .route("/workouts", get(list_workouts).post(create_workout))
        .route("/workouts/{id}", put(update_workout).delete(delete_workout))
}
