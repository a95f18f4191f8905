use axum::{Router, middleware, routing::get};

use crate::middleware::ownership::require_progress_owner;
use crate::modules::progress::controller::{
    create_progress, delete_progress, get_progress, list_progress, update_progress,
};
use crate::state::AppState;

pub fn init_progress_router(state: AppState) -> Router<AppState> {
    let owned = Router::new()
        .route(
            "/{id}",
            get(get_progress).put(update_progress).delete(delete_progress),
        )
        .route_layer(middleware::from_fn_with_state(state, require_progress_owner));

    Router::new()
        .route("/", get(list_progress).post(create_progress))
        .merge(owned)
}
