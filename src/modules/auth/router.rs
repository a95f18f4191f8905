use std::sync::Arc;

use axum::{Router, routing::post};
use tower_governor::GovernorLayer;

use super::controller::{login, signup};
use crate::state::AppState;

/// Credential routes. With rate limiting enabled each client IP gets its
/// own token bucket; exhausted buckets are answered with 429.
pub fn init_auth_router(state: &AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login));

    if !state.rate_limit_config.enabled {
        return router;
    }

    let config = Arc::new(state.rate_limit_config.auth_governor_config());
    router.layer(GovernorLayer::new(config))
}
