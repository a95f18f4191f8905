mod common;

use axum::http::StatusCode;
use common::{create_test_user, generate_unique_email, login, send, setup_test_app};
use ironlog_auth::Role;
use ironlog_cli::seeder::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD, ensure_default_admin};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_then_login(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let email = generate_unique_email();

    let (status, body) = send(
        &app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({ "email": email, "password": "newpassword" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully!");
    assert!(body["userId"].is_string());

    let (status, body) = send(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": email, "password": "newpassword" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["expiresIn"], 3600);
    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["role"], "user");
    assert!(body["user"].get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_duplicate_email_is_rejected(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let user = create_test_user(&pool, Role::User).await;

    let (status, body) = send(
        &app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({ "email": user.email.to_uppercase(), "password": "anotherpass" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User already exists");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_reports_every_invalid_field(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = send(
        &app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({ "email": "not-an-email", "password": "123" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert!(body["details"]["email"].is_array());
    assert!(body["details"]["password"].is_array());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_missing_field(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = send(
        &app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({ "email": "lifter@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "password is required");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_invalid_credentials(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let user = create_test_user(&pool, Role::User).await;

    let (status, unknown) = send(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": "nonexistent@test.com", "password": "wrongpass" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, wrong_password) = send(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": user.email, "password": "wrongpass" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(unknown["error"], "Invalid email or password");
    assert_eq!(unknown, wrong_password);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seeded_admin_can_login(pool: PgPool) {
    assert!(ensure_default_admin(&pool).await.unwrap());
    assert!(!ensure_default_admin(&pool).await.unwrap());

    let app = setup_test_app(pool);
    let token = login(&app, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD).await;

    let (status, body) = send(&app, "GET", "/users/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], DEFAULT_ADMIN_EMAIL);
    assert_eq!(body["role"], "admin");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_profile_of_logged_in_user(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let user = create_test_user(&pool, Role::User).await;
    let token = login(&app, &user.email, &user.password).await;

    let (status, body) = send(&app, "GET", "/users/me", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user.id.to_string());
    assert_eq!(body["role"], "user");
    assert!(body["createdAt"].is_string());
}
