mod common;

use axum::http::StatusCode;
use common::{create_test_user, create_workout, seed_exercises, send, setup_test_app, workout_body};
use ironlog_auth::Role;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

async fn count_rows(pool: &PgPool) -> (i64, i64) {
    sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM workouts), (SELECT COUNT(*) FROM workout_exercises)",
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_workout_returns_rows_in_order(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let exercises = seed_exercises(&pool).await;
    let user = create_test_user(&pool, Role::User).await;

    let (status, body) = send(
        &app,
        "POST",
        "/users/workouts",
        Some(&user.token()),
        Some(json!({
            "date": "2025-03-03T08:30:00.000Z",
            "notes": "<script>alert(1)</script>Leg day",
            "exercises": [
                { "exerciseId": exercises[2], "sets": 5, "reps": 5, "weight": 100 },
                { "exerciseId": exercises[0], "sets": 3, "reps": 12, "weight": 0 }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["userId"], user.id.to_string());
    assert_eq!(body["notes"], "Leg day");

    let rows = body["exercises"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["exerciseId"], exercises[2].to_string());
    assert_eq!(rows[0]["weight"], 100.0);
    assert!(rows[0]["exerciseName"].is_string());
    assert_eq!(rows[1]["exerciseId"], exercises[0].to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_one_unknown_exercise_rejects_the_whole_workout(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let exercises = seed_exercises(&pool).await;
    assert_eq!(exercises.len(), 5);
    let user = create_test_user(&pool, Role::User).await;

    let unknown = Uuid::new_v4();
    let mut ids = exercises.clone();
    ids.insert(3, unknown);

    let (status, body) = send(
        &app,
        "POST",
        "/users/workouts",
        Some(&user.token()),
        Some(workout_body(&ids)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid exercise IDs");
    assert_eq!(body["details"], json!([unknown.to_string()]));
    assert_eq!(count_rows(&pool).await, (0, 0));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_row_minimums_are_enforced(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let exercises = seed_exercises(&pool).await;
    let user = create_test_user(&pool, Role::User).await;

    let (status, body) = send(
        &app,
        "POST",
        "/users/workouts",
        Some(&user.token()),
        Some(json!({
            "date": "2025-03-03T08:30:00Z",
            "exercises": [
                { "exerciseId": exercises[0], "sets": 0, "reps": 1, "weight": -2.5 }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert!(body["details"]["exercises[0].sets"].is_array());
    assert!(body["details"]["exercises[0].weight"].is_array());
    assert!(body["details"].get("exercises[0].reps").is_none());
    assert_eq!(count_rows(&pool).await, (0, 0));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_workout_needs_at_least_one_exercise(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let user = create_test_user(&pool, Role::User).await;

    let (status, body) = send(
        &app,
        "POST",
        "/users/workouts",
        Some(&user.token()),
        Some(workout_body(&[])),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["details"]["exercises"],
        json!(["must contain at least one exercise"])
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_is_paginated_newest_first(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let exercises = seed_exercises(&pool).await;
    let user = create_test_user(&pool, Role::User).await;
    let other = create_test_user(&pool, Role::User).await;
    let token = user.token();

    for date in ["2025-01-01T07:00:00Z", "2025-03-01T07:00:00Z", "2025-02-01T07:00:00Z"] {
        let mut body = workout_body(&exercises[..1]);
        body["date"] = json!(date);
        let (status, _) = send(&app, "POST", "/users/workouts", Some(&token), Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    create_workout(&app, &other.token(), &exercises[..1]).await;

    let (status, body) = send(&app, "GET", "/users/workouts?limit=2", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert!(data[0]["date"].as_str().unwrap().starts_with("2025-03-01"));
    assert!(data[1]["date"].as_str().unwrap().starts_with("2025-02-01"));
    assert_eq!(data[0]["exercises"].as_array().unwrap().len(), 1);
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(body["meta"]["hasMore"], true);

    let (_, body) = send(&app, "GET", "/users/workouts?page=2&limit=2", Some(&token), None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["meta"]["hasMore"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_empty_list_is_an_empty_page(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let user = create_test_user(&pool, Role::User).await;

    let (status, body) = send(&app, "GET", "/users/workouts", Some(&user.token()), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["meta"]["total"], 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_rows(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let exercises = seed_exercises(&pool).await;
    let user = create_test_user(&pool, Role::User).await;
    let token = user.token();

    let workout_id = create_workout(&app, &token, &exercises[..3]).await;

    let mut replacement = workout_body(&exercises[3..]);
    replacement["notes"] = json!("Cardio instead");
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/users/workouts/{}", workout_id),
        Some(&token),
        Some(replacement),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notes"], "Cardio instead");
    let rows = body["exercises"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["exerciseId"], exercises[3].to_string());
    assert_eq!(count_rows(&pool).await, (1, 2));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_with_unknown_exercise_keeps_old_rows(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let exercises = seed_exercises(&pool).await;
    let user = create_test_user(&pool, Role::User).await;
    let token = user.token();

    let workout_id = create_workout(&app, &token, &exercises[..2]).await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/users/workouts/{}", workout_id),
        Some(&token),
        Some(workout_body(&[Uuid::new_v4()])),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(count_rows(&pool).await, (1, 2));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_workout(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let exercises = seed_exercises(&pool).await;
    let user = create_test_user(&pool, Role::User).await;
    let token = user.token();

    let workout_id = create_workout(&app, &token, &exercises[..2]).await;
    let uri = format!("/users/workouts/{}", workout_id);

    let (status, body) = send(&app, "DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Workout deleted successfully");
    assert_eq!(count_rows(&pool).await, (0, 0));

    let (status, _) = send(&app, "GET", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_malformed_workout_id_is_rejected(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let user = create_test_user(&pool, Role::User).await;

    let (status, _) = send(
        &app,
        "GET",
        "/users/workouts/not-a-uuid",
        Some(&user.token()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
