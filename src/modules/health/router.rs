use axum::{Router, routing::get};

use crate::modules::health::controller::{health_check, welcome};
use crate::state::AppState;

pub fn init_health_router() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
}
