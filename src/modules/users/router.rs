use axum::{Router, routing::get};

use crate::modules::progress::init_progress_router;
use crate::modules::users::controller::{admin_dashboard, get_profile};
use crate::modules::workouts::init_workouts_router;
use crate::state::AppState;

/// Routes scoped to the authenticated caller.
pub fn init_users_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(get_profile))
        .route("/admin-dashboard", get(admin_dashboard))
        .nest("/workouts", init_workouts_router(state.clone()))
        .nest("/progress", init_progress_router(state))
}
