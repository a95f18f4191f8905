//! Seeding of the default admin, the exercise catalog and demo data.
//!
//! Demo users get `@example.com` addresses; [`clear_demo`] removes exactly
//! those accounts, and their workouts and progress logs cascade with them.

mod admin;
mod catalog;
mod models;
mod users;
mod workouts;

use sqlx::PgPool;
use std::time::Instant;

pub use admin::{
    DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD, create_admin, ensure_default_admin,
};
pub use catalog::{CATALOG, seed_catalog};
pub use models::{DemoConfig, UserSeed, WorkoutRowSeed, WorkoutSeed};
pub use users::{DEMO_EMAIL_DOMAIN, generate_users, seed_users};
pub use workouts::{generate_workouts, seed_workouts};

/// Seeds the default admin account and the sample exercise catalog.
pub async fn seed_defaults(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🌱 Seeding defaults...");

    let created = ensure_default_admin(db).await?;
    if created {
        println!("   ✓ Created admin {}", DEFAULT_ADMIN_EMAIL);
    } else {
        println!("   ✓ Admin {} already exists", DEFAULT_ADMIN_EMAIL);
    }

    seed_catalog(db).await?;

    println!("✅ Defaults seeded in {:?}", start_time.elapsed());
    Ok(())
}

/// Seeds demo users with workouts built from the existing catalog.
pub async fn seed_demo(db: &PgPool, config: DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "🏋️  Seeding {} demo users with {} workouts each...",
        config.users, config.workouts_per_user
    );

    let exercise_ids: Vec<uuid::Uuid> = sqlx::query_scalar("SELECT id FROM exercises ORDER BY name")
        .fetch_all(db)
        .await?;

    if exercise_ids.is_empty() {
        return Err("No exercises found. Run `seed` first.".into());
    }

    let password_hash = bcrypt::hash(users::DEMO_PASSWORD, 4)?;
    let user_ids = seed_users(db, config.users, &password_hash).await?;
    seed_workouts(db, &user_ids, &exercise_ids, &config).await?;

    println!("\n✅ Demo data seeded in {:?}", start_time.elapsed());
    println!("   Demo users sign in with password '{}'", users::DEMO_PASSWORD);
    Ok(())
}

/// Deletes demo users; their workouts and progress logs cascade.
pub async fn clear_demo(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing demo users...");

    let pattern = format!("%@{}", DEMO_EMAIL_DOMAIN);
    let deleted = sqlx::query("DELETE FROM users WHERE email LIKE $1 AND role = 'user'")
        .bind(&pattern)
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} demo users in {:?}",
        deleted,
        start_time.elapsed()
    );
    Ok(deleted)
}
