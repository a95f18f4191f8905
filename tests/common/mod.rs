use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use ironlog::router::init_router;
use ironlog::state::AppState;
use ironlog_auth::{Role, create_access_token};
use ironlog_config::{CorsConfig, JwtConfig, RateLimitConfig, StorageConfig};
use ironlog_core::hash_password;

pub const TEST_JWT_SECRET: &str = "test-secret-key-at-least-32-characters-long";

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl TestUser {
    /// Signs a token the same way login does, without the bcrypt round trip.
    pub fn token(&self) -> String {
        create_access_token(self.id, &self.email, self.role, &test_jwt_config()).unwrap()
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_JWT_SECRET, 3600)
}

pub fn test_upload_dir() -> PathBuf {
    std::env::temp_dir().join(format!("ironlog-test-uploads-{}", Uuid::new_v4()))
}

pub fn test_state(pool: PgPool, rate_limit_config: RateLimitConfig) -> AppState {
    AppState::new(
        pool,
        test_jwt_config(),
        CorsConfig::from_list("http://localhost:3000"),
        rate_limit_config,
        StorageConfig {
            upload_dir: test_upload_dir(),
            public_base_url: "http://localhost:3000/files".to_string(),
            max_upload_bytes: 1024 * 1024,
        },
    )
}

/// Router with rate limiting off; `oneshot` requests carry no peer address.
pub fn setup_test_app(pool: PgPool) -> Router {
    init_router(test_state(
        pool,
        RateLimitConfig {
            enabled: false,
            ..RateLimitConfig::default()
        },
    ))
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

pub async fn create_test_user(pool: &PgPool, role: Role) -> TestUser {
    let email = generate_unique_email();
    let password = "testpass123".to_string();
    let hashed = hash_password(&password).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (email, password, role) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&email)
    .bind(&hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email,
        password,
        role,
    }
}

/// Seeds the sample catalog and returns the ids of its exercises.
#[allow(dead_code)]
pub async fn seed_exercises(pool: &PgPool) -> Vec<Uuid> {
    ironlog_cli::seeder::seed_catalog(pool).await.unwrap();
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM exercises ORDER BY name")
        .fetch_all(pool)
        .await
        .unwrap()
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

#[allow(dead_code)]
pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

#[allow(dead_code)]
pub fn workout_body(exercise_ids: &[Uuid]) -> Value {
    let rows: Vec<Value> = exercise_ids
        .iter()
        .map(|id| serde_json::json!({ "exerciseId": id, "sets": 4, "reps": 10, "weight": 50 }))
        .collect();

    serde_json::json!({
        "date": "2025-03-03T08:30:00.000Z",
        "notes": "Push day",
        "exercises": rows,
    })
}

/// Logs a workout through the API and returns its id.
#[allow(dead_code)]
pub async fn create_workout(app: &Router, token: &str, exercise_ids: &[Uuid]) -> Uuid {
    let (status, body) = send(
        app,
        "POST",
        "/users/workouts",
        Some(token),
        Some(workout_body(exercise_ids)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "workout not created: {}", body);
    body["id"].as_str().unwrap().parse().unwrap()
}
