//! Demo workout seeding.
//!
//! Workout ids are generated client-side so the exercise rows can be
//! inserted without reading them back.

use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::lorem::en::Sentence;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;
use uuid::Uuid;

use super::models::{DemoConfig, WorkoutRowSeed, WorkoutSeed};

/// Generates `workouts_per_user` workouts for every user over the last 90 days.
pub fn generate_workouts(
    user_ids: &[Uuid],
    exercise_ids: &[Uuid],
    config: &DemoConfig,
) -> Vec<WorkoutSeed> {
    if exercise_ids.is_empty() {
        return Vec::new();
    }

    let max_rows = config.max_exercises_per_workout.clamp(1, exercise_ids.len());

    user_ids
        .par_iter()
        .flat_map(|&user_id| {
            (0..config.workouts_per_user)
                .map(|_| {
                    let days_ago: i64 = (0..90).fake();
                    let row_count: usize = (1..=max_rows).fake();
                    let first: usize = (0..exercise_ids.len()).fake();

                    let rows = (0..row_count)
                        .map(|offset| WorkoutRowSeed {
                            exercise_id: exercise_ids[(first + offset) % exercise_ids.len()],
                            sets: (2..=5).fake(),
                            reps: (5..=15).fake(),
                            weight: ((0..=40).fake::<i32>() as f64) * 2.5,
                        })
                        .collect();

                    let notes = if (0..3).fake::<u8>() == 0 {
                        Some(Sentence(3..8).fake::<String>())
                    } else {
                        None
                    };

                    WorkoutSeed {
                        id: Uuid::new_v4(),
                        user_id,
                        date: Utc::now() - Duration::days(days_ago),
                        notes,
                        rows,
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub async fn seed_workouts(
    db: &PgPool,
    user_ids: &[Uuid],
    exercise_ids: &[Uuid],
    config: &DemoConfig,
) -> Result<usize, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "📝 Seeding {} workouts ({} per user)...",
        user_ids.len() * config.workouts_per_user,
        config.workouts_per_user
    );

    let workouts = generate_workouts(user_ids, exercise_ids, config);
    let mut tx = db.begin().await?;

    // 4 params per workout, 6 per row
    const WORKOUT_BATCH_SIZE: usize = 1000;
    const ROW_BATCH_SIZE: usize = 1000;

    for chunk in workouts.chunks(WORKOUT_BATCH_SIZE) {
        insert_workouts_chunk(&mut tx, chunk).await?;
    }

    let rows: Vec<(Uuid, i32, &WorkoutRowSeed)> = workouts
        .iter()
        .flat_map(|w| {
            w.rows
                .iter()
                .enumerate()
                .map(move |(position, row)| (w.id, position as i32, row))
        })
        .collect();

    for chunk in rows.chunks(ROW_BATCH_SIZE) {
        insert_rows_chunk(&mut tx, chunk).await?;
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} workouts with {} exercise rows in {:?}",
        workouts.len(),
        rows.len(),
        start_time.elapsed()
    );

    Ok(workouts.len())
}

async fn insert_workouts_chunk(
    tx: &mut Transaction<'_, Postgres>,
    workouts: &[WorkoutSeed],
) -> Result<(), Box<dyn std::error::Error>> {
    if workouts.is_empty() {
        return Ok(());
    }

    let mut query = String::from("INSERT INTO workouts (id, user_id, date, notes) VALUES ");

    for i in 0..workouts.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 4;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${})",
            param_idx + 1,
            param_idx + 2,
            param_idx + 3,
            param_idx + 4
        ));
    }

    let mut q = sqlx::query(&query);
    for workout in workouts {
        q = q
            .bind(workout.id)
            .bind(workout.user_id)
            .bind(workout.date)
            .bind(&workout.notes);
    }

    q.execute(&mut **tx).await?;
    Ok(())
}

async fn insert_rows_chunk(
    tx: &mut Transaction<'_, Postgres>,
    rows: &[(Uuid, i32, &WorkoutRowSeed)],
) -> Result<(), Box<dyn std::error::Error>> {
    if rows.is_empty() {
        return Ok(());
    }

    let mut query = String::from(
        "INSERT INTO workout_exercises (workout_id, position, exercise_id, sets, reps, weight) VALUES ",
    );

    for i in 0..rows.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 6;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${}, ${})",
            param_idx + 1,
            param_idx + 2,
            param_idx + 3,
            param_idx + 4,
            param_idx + 5,
            param_idx + 6
        ));
    }

    let mut q = sqlx::query(&query);
    for (workout_id, position, row) in rows {
        q = q
            .bind(workout_id)
            .bind(position)
            .bind(row.exercise_id)
            .bind(row.sets)
            .bind(row.reps)
            .bind(row.weight);
    }

    q.execute(&mut **tx).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_workouts_respect_row_constraints() {
        let users = vec![Uuid::new_v4(), Uuid::new_v4()];
        let exercises = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let config = DemoConfig::new(2).with_workouts(4);

        let workouts = generate_workouts(&users, &exercises, &config);
        assert_eq!(workouts.len(), 8);

        for workout in &workouts {
            assert!(users.contains(&workout.user_id));
            assert!(!workout.rows.is_empty() && workout.rows.len() <= 3);
            for row in &workout.rows {
                assert!(exercises.contains(&row.exercise_id));
                assert!(row.sets >= 1 && row.reps >= 1 && row.weight >= 0.0);
            }
        }
    }

    #[test]
    fn test_no_workouts_without_exercises() {
        let workouts = generate_workouts(&[Uuid::new_v4()], &[], &DemoConfig::default());
        assert!(workouts.is_empty());
    }
}
