mod common;

use axum::http::StatusCode;
use common::{create_test_user, seed_exercises, send, setup_test_app};
use ironlog_auth::Role;
use serde_json::{Value, json};
use sqlx::PgPool;
use uuid::Uuid;

async fn record(app: &axum::Router, token: &str, body: Value) -> Value {
    let (status, body) = send(app, "POST", "/users/progress", Some(token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "progress not recorded: {}", body);
    body
}

#[sqlx::test(migrations = "./migrations")]
async fn test_record_body_weight(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let user = create_test_user(&pool, Role::User).await;

    let body = record(
        &app,
        &user.token(),
        json!({
            "metric": "body_weight",
            "value": 82.5,
            "notes": "<b>Morning</b> weigh-in",
            "loggedAt": "2025-03-01T07:00:00Z"
        }),
    )
    .await;

    assert_eq!(body["metric"], "body_weight");
    assert_eq!(body["value"], 82.5);
    assert_eq!(body["notes"], "Morning weigh-in");
    assert_eq!(body["userId"], user.id.to_string());
    assert!(body["exerciseId"].is_null());
    assert!(body["loggedAt"].as_str().unwrap().starts_with("2025-03-01T07:00:00"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_one_rep_max_requires_an_exercise(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let user = create_test_user(&pool, Role::User).await;

    let (status, body) = send(
        &app,
        "POST",
        "/users/progress",
        Some(&user.token()),
        Some(json!({ "metric": "one_rep_max", "value": 140 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(
        body["details"]["exerciseId"],
        json!(["is required for one_rep_max"])
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_exercise_is_rejected(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let user = create_test_user(&pool, Role::User).await;
    let unknown = Uuid::new_v4();

    let (status, body) = send(
        &app,
        "POST",
        "/users/progress",
        Some(&user.token()),
        Some(json!({ "metric": "one_rep_max", "value": 140, "exerciseId": unknown })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid exercise ID");
    assert_eq!(body["details"], json!([unknown.to_string()]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_invalid_metric_and_negative_value(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let user = create_test_user(&pool, Role::User).await;
    let token = user.token();

    let (status, _) = send(
        &app,
        "POST",
        "/users/progress",
        Some(&token),
        Some(json!({ "metric": "mood", "value": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "POST",
        "/users/progress",
        Some(&token),
        Some(json!({ "metric": "distance", "value": -5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["value"].is_array());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_filters_by_metric_and_owner(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let exercises = seed_exercises(&pool).await;
    let user = create_test_user(&pool, Role::User).await;
    let other = create_test_user(&pool, Role::User).await;
    let token = user.token();

    record(&app, &token, json!({ "metric": "body_weight", "value": 83, "loggedAt": "2025-01-01T07:00:00Z" })).await;
    record(&app, &token, json!({ "metric": "body_weight", "value": 82, "loggedAt": "2025-02-01T07:00:00Z" })).await;
    record(
        &app,
        &token,
        json!({ "metric": "one_rep_max", "value": 140, "exerciseId": exercises[0] }),
    )
    .await;
    record(&app, &other.token(), json!({ "metric": "body_weight", "value": 70 })).await;

    let (status, body) = send(&app, "GET", "/users/progress", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 3);

    let (status, body) = send(
        &app,
        "GET",
        "/users/progress?metric=body_weight",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["value"], 82.0);
    assert_eq!(data[1]["value"], 83.0);

    let (_, body) = send(
        &app,
        "GET",
        "/users/progress?metric=body_weight&limit=1",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["meta"]["hasMore"], true);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_merges_fields(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let exercises = seed_exercises(&pool).await;
    let user = create_test_user(&pool, Role::User).await;
    let token = user.token();

    let created = record(
        &app,
        &token,
        json!({ "metric": "one_rep_max", "value": 120, "exerciseId": exercises[4], "notes": "Belt" }),
    )
    .await;
    let uri = format!("/users/progress/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, "PUT", &uri, Some(&token), Some(json!({ "value": 125 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], 125.0);
    assert_eq!(body["notes"], "Belt");
    assert_eq!(body["exerciseId"], exercises[4].to_string());

    let (status, body) = send(&app, "GET", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], 125.0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_switching_to_one_rep_max_needs_an_exercise(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let user = create_test_user(&pool, Role::User).await;
    let token = user.token();

    let created = record(&app, &token, json!({ "metric": "body_weight", "value": 80 })).await;
    let uri = format!("/users/progress/{}", created["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(&token),
        Some(json!({ "metric": "one_rep_max" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["exerciseId"].is_array());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_progress_ownership(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let owner = create_test_user(&pool, Role::User).await;
    let intruder = create_test_user(&pool, Role::User).await;
    let admin = create_test_user(&pool, Role::Admin).await;

    let created = record(&app, &owner.token(), json!({ "metric": "body_fat", "value": 18 })).await;
    let uri = format!("/users/progress/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, "GET", &uri, Some(&intruder.token()), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        "PUT",
        &uri,
        Some(&intruder.token()),
        Some(json!({ "value": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, "DELETE", &uri, Some(&intruder.token()), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, "GET", &uri, Some(&admin.token()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], 18.0);

    let (status, body) = send(&app, "DELETE", &uri, Some(&owner.token()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Progress log deleted");

    let (status, body) = send(&app, "GET", &uri, Some(&owner.token()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Progress log not found");
}
