use axum::{Router, routing::get};

use crate::modules::exercises::controller::{
    get_exercise, get_exercise_by_name, list_exercises, list_exercises_by_category,
};
use crate::state::AppState;

pub fn init_exercises_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_exercises))
        .route("/{id}", get(get_exercise))
        .route("/name/{name}", get(get_exercise_by_name))
        .route("/category/{category_name}", get(list_exercises_by_category))
}
