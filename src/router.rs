use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::auth::require_auth;
use crate::middleware::role::require_admin;
use crate::modules::admin::init_admin_router;
use crate::modules::auth::init_auth_router;
use crate::modules::categories::init_categories_router;
use crate::modules::exercises::init_exercises_router;
use crate::modules::health::init_health_router;
use crate::modules::users::init_users_router;
use crate::state::AppState;

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(init_health_router())
        .nest("/auth", init_auth_router(&state))
        .nest(
            "/users",
            init_users_router(state.clone())
                .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
        )
        .nest(
            "/admin",
            init_admin_router(state.storage_config.max_upload_bytes)
                .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
        )
        .nest("/categories", init_categories_router())
        .nest("/exercises", init_exercises_router())
        .nest_service("/files", ServeDir::new(&state.storage_config.upload_dir))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
