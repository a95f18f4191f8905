use std::collections::BTreeMap;

use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    /// Route groups by name
    pub routes: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` or `degraded`
    pub status: String,
    /// `up` or `down`
    pub database: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome document", body = WelcomeResponse)),
    tag = "Health"
)]
pub async fn welcome() -> Json<WelcomeResponse> {
    let routes = [
        ("auth", "/auth"),
        ("users", "/users"),
        ("workouts", "/users/workouts"),
        ("progress", "/users/progress"),
        ("exercises", "/exercises"),
        ("categories", "/categories"),
        ("admin", "/admin"),
        ("docs", "/swagger-ui"),
    ]
    .into_iter()
    .map(|(name, path)| (name.to_string(), path.to_string()))
    .collect();

    Json(WelcomeResponse {
        message: "Welcome to the Workout Tracker API!".to_string(),
        routes,
    })
}

/// Liveness probe that also pings the database
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are up", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    ),
    tag = "Health"
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, database, code) = match ironlog_db::ping(&state.db).await {
        Ok(()) => ("ok", "up", StatusCode::OK),
        Err(e) => {
            tracing::error!(error = %e, "Database ping failed");
            ("degraded", "down", StatusCode::SERVICE_UNAVAILABLE)
        }
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            database: database.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }),
    )
}
