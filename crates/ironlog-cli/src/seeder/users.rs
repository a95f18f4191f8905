//! Demo user seeding.

use fake::Fake;
use fake::faker::name::en::*;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;
use uuid::Uuid;

use super::models::UserSeed;

pub const DEMO_EMAIL_DOMAIN: &str = "example.com";
pub(super) const DEMO_PASSWORD: &str = "password123";

/// Generates demo accounts in parallel; emails are unique per index.
pub fn generate_users(count: usize, password_hash: &str) -> Vec<UserSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();

            let email = format!(
                "{}.{}+{}@{}",
                slug(&first_name),
                slug(&last_name),
                idx,
                DEMO_EMAIL_DOMAIN
            );

            UserSeed {
                email,
                password_hash: password_hash.to_string(),
            }
        })
        .collect()
}

fn slug(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

pub async fn seed_users(
    db: &PgPool,
    count: usize,
    password_hash: &str,
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("👥 Seeding {} users...", count);

    let users = generate_users(count, password_hash);
    let mut tx = db.begin().await?;

    // 2 params per user
    const BATCH_SIZE: usize = 1000;
    let mut all_ids = Vec::with_capacity(users.len());

    for chunk in users.chunks(BATCH_SIZE) {
        all_ids.extend(insert_users_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} users in {:?}",
        all_ids.len(),
        start_time.elapsed()
    );

    Ok(all_ids)
}

async fn insert_users_chunk(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserSeed],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    if users.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO users (email, password) VALUES ");

    for i in 0..users.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 2;
        query.push_str(&format!("(${}, ${})", param_idx + 1, param_idx + 2));
    }

    // Re-running the seed skips addresses that already exist
    query.push_str(" ON CONFLICT DO NOTHING RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for user in users {
        q = q.bind(&user.email).bind(&user.password_hash);
    }

    let ids: Vec<Uuid> = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}
