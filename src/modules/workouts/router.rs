use axum::{Router, middleware, routing::get};

use crate::middleware::ownership::require_workout_owner;
use crate::modules::workouts::controller::{
    create_workout, delete_workout, get_workout, list_workouts, update_workout,
};
use crate::state::AppState;

/// Workout routes of the authenticated caller. Routes addressing a single
/// workout pass the ownership gate first.
pub fn init_workouts_router(state: AppState) -> Router<AppState> {
    let owned = Router::new()
        .route(
            "/{id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
        .route_layer(middleware::from_fn_with_state(state, require_workout_owner));

    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .merge(owned)
}
