//! Admin account creation.

use ironlog_auth::Role;
use ironlog_core::hash_password;
use ironlog_models::UserId;
use sqlx::PgPool;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@workout.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Creates an admin account, failing if the email is already registered.
pub async fn create_admin(
    db: &PgPool,
    email: &str,
    password: &str,
) -> Result<UserId, Box<dyn std::error::Error>> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(format!("'{}' is not a valid email address", email).into());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".into());
    }

    insert_admin(db, &email, password)
        .await?
        .ok_or_else(|| "User with this email already exists".into())
}

/// Creates `admin@workout.com` unless it exists. Returns whether it was created.
pub async fn ensure_default_admin(db: &PgPool) -> Result<bool, Box<dyn std::error::Error>> {
    let created = insert_admin(db, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD).await?;
    Ok(created.is_some())
}

async fn insert_admin(
    db: &PgPool,
    email: &str,
    password: &str,
) -> Result<Option<UserId>, Box<dyn std::error::Error>> {
    let hashed_password =
        hash_password(password).map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let user_id = sqlx::query_scalar::<_, UserId>(
        "INSERT INTO users (email, password, role)
         VALUES ($1, $2, $3)
         ON CONFLICT DO NOTHING
         RETURNING id",
    )
    .bind(email)
    .bind(&hashed_password)
    .bind(Role::Admin)
    .fetch_optional(db)
    .await?;

    Ok(user_id)
}
