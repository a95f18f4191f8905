//! Sample exercise catalog.

use sqlx::PgPool;
use std::time::Instant;

/// `(name, description, category)` of every catalog exercise.
pub const CATALOG: &[(&str, &str, &str)] = &[
    ("Bench Press", "Barbell press lying on a flat bench", "Strength"),
    ("Squat", "Barbell back squat to parallel", "Strength"),
    ("Deadlift", "Conventional barbell deadlift from the floor", "Strength"),
    ("Running", "Steady-state outdoor or treadmill run", "Cardio"),
    ("Jump Rope", "Continuous skipping with a rope", "Cardio"),
];

/// Inserts the catalog exercises that are not present yet.
pub async fn seed_catalog(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("📋 Seeding {} catalog exercises...", CATALOG.len());

    let mut tx = db.begin().await?;
    let mut inserted = 0;

    for (name, description, category) in CATALOG {
        let result = sqlx::query(
            "INSERT INTO exercises (name, description, category_id)
             SELECT $1, $2, c.id FROM categories c WHERE LOWER(c.name) = LOWER($3)
             ON CONFLICT DO NOTHING",
        )
        .bind(name)
        .bind(description)
        .bind(category)
        .execute(&mut *tx)
        .await?;

        inserted += result.rows_affected();
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} exercises in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}
