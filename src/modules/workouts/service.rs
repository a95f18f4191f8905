use std::collections::HashMap;

use anyhow::anyhow;
use serde_json::json;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use ironlog_core::validation::missing_references;
use ironlog_core::{AppError, PaginationMeta, PaginationParams};
use ironlog_models::{ExerciseId, UserId, WorkoutId};

use crate::metrics::track_workout_logged;
use crate::modules::workouts::model::{
    PaginatedWorkoutsResponse, UpdateWorkoutDto, Workout, WorkoutExercise, WorkoutExerciseInput,
    WorkoutWithExercises,
};

pub const INVALID_EXERCISE_IDS: &str = "Invalid exercise IDs";

const WORKOUT_COLUMNS: &str = "id, user_id, date, notes, created_at, updated_at";

const SELECT_ROWS: &str = r#"SELECT we.id, we.workout_id, we.exercise_id, e.name AS exercise_name,
          we.sets, we.reps, we.weight
   FROM workout_exercises we
   JOIN exercises e ON e.id = we.exercise_id
   WHERE we.workout_id = ANY($1)
   ORDER BY we.workout_id, we.position"#;

pub struct WorkoutService;

impl WorkoutService {
    /// Lists workouts newest first, restricted to `owner` when given.
    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        owner: Option<UserId>,
        params: PaginationParams,
    ) -> Result<PaginatedWorkoutsResponse, AppError> {
        let limit = params.limit();
        let offset = params.offset();

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM workouts WHERE $1::uuid IS NULL OR user_id = $1",
        )
        .bind(owner)
        .fetch_one(db)
        .await?;

        let workouts = sqlx::query_as::<_, Workout>(&format!(
            r#"SELECT {WORKOUT_COLUMNS} FROM workouts
               WHERE $1::uuid IS NULL OR user_id = $1
               ORDER BY date DESC, created_at DESC
               LIMIT $2 OFFSET $3"#
        ))
        .bind(owner)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;

        let data = Self::attach_rows(db, workouts).await?;

        Ok(PaginatedWorkoutsResponse {
            data,
            meta: PaginationMeta::new(total, &params),
        })
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: WorkoutId) -> Result<WorkoutWithExercises, AppError> {
        let workout = sqlx::query_as::<_, Workout>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Workout not found")))?;

        let mut workouts = Self::attach_rows(db, vec![workout]).await?;
        workouts
            .pop()
            .ok_or_else(|| AppError::internal_error("Workout vanished while loading rows"))
    }

    /// Logs a workout for `owner`. The workout and all of its rows are
    /// written in one transaction after every exercise id is known to exist.
    #[instrument(skip(db, dto), fields(rows = dto.exercises.len()))]
    pub async fn create(
        db: &PgPool,
        owner: UserId,
        dto: UpdateWorkoutDto,
    ) -> Result<WorkoutWithExercises, AppError> {
        Self::check_exercises(db, &dto.exercises).await?;

        let mut tx = db.begin().await?;

        let workout = sqlx::query_as::<_, Workout>(&format!(
            r#"INSERT INTO workouts (user_id, date, notes)
               VALUES ($1, $2, $3)
               RETURNING {WORKOUT_COLUMNS}"#
        ))
        .bind(owner)
        .bind(dto.date)
        .bind(&dto.notes)
        .fetch_one(&mut *tx)
        .await?;

        Self::insert_rows(&mut tx, workout.id, &dto.exercises).await?;
        tx.commit().await?;

        track_workout_logged();
        tracing::info!(workout_id = %workout.id, user_id = %owner, "Workout logged");

        Self::get(db, workout.id).await
    }

    /// Replaces date, notes and the full list of rows of a workout.
    #[instrument(skip(db, dto), fields(rows = dto.exercises.len()))]
    pub async fn replace(
        db: &PgPool,
        id: WorkoutId,
        dto: UpdateWorkoutDto,
    ) -> Result<WorkoutWithExercises, AppError> {
        Self::check_exercises(db, &dto.exercises).await?;

        let mut tx = db.begin().await?;

        let updated = sqlx::query(
            "UPDATE workouts SET date = $2, notes = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(dto.date)
        .bind(&dto.notes)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Workout not found")));
        }

        sqlx::query("DELETE FROM workout_exercises WHERE workout_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        Self::insert_rows(&mut tx, id, &dto.exercises).await?;
        tx.commit().await?;

        Self::get(db, id).await
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: WorkoutId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Workout not found")));
        }

        Ok(())
    }

    /// Rejects the request when any referenced exercise does not exist,
    /// listing every unknown id.
    async fn check_exercises(db: &PgPool, rows: &[WorkoutExerciseInput]) -> Result<(), AppError> {
        let requested: Vec<ExerciseId> = rows.iter().map(|row| row.exercise_id).collect();

        let found = sqlx::query_scalar::<_, ExerciseId>("SELECT id FROM exercises WHERE id = ANY($1)")
            .bind(&requested)
            .fetch_all(db)
            .await?;

        let missing = missing_references(&requested, &found);
        if missing.is_empty() {
            return Ok(());
        }

        tracing::warn!(count = missing.len(), "Workout references unknown exercises");
        let details: Vec<String> = missing.iter().map(ToString::to_string).collect();
        Err(AppError::validation(INVALID_EXERCISE_IDS, json!(details)))
    }

    async fn insert_rows(
        conn: &mut PgConnection,
        workout_id: WorkoutId,
        rows: &[WorkoutExerciseInput],
    ) -> Result<(), AppError> {
        let positions: Vec<i32> = (0..rows.len() as i32).collect();
        let exercise_ids: Vec<ExerciseId> = rows.iter().map(|row| row.exercise_id).collect();
        let sets: Vec<i32> = rows.iter().map(|row| row.sets).collect();
        let reps: Vec<i32> = rows.iter().map(|row| row.reps).collect();
        let weights: Vec<f64> = rows.iter().map(|row| row.weight).collect();

        sqlx::query(
            r#"INSERT INTO workout_exercises (workout_id, position, exercise_id, sets, reps, weight)
               SELECT $1, r.position, r.exercise_id, r.sets, r.reps, r.weight
               FROM UNNEST($2::int4[], $3::uuid[], $4::int4[], $5::int4[], $6::float8[])
                    AS r(position, exercise_id, sets, reps, weight)"#,
        )
        .bind(workout_id)
        .bind(&positions)
        .bind(&exercise_ids)
        .bind(&sets)
        .bind(&reps)
        .bind(&weights)
        .execute(conn)
        .await?;

        Ok(())
    }

    async fn attach_rows(
        db: &PgPool,
        workouts: Vec<Workout>,
    ) -> Result<Vec<WorkoutWithExercises>, AppError> {
        if workouts.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<WorkoutId> = workouts.iter().map(|w| w.id).collect();
        let rows = sqlx::query_as::<_, WorkoutExercise>(SELECT_ROWS)
            .bind(&ids)
            .fetch_all(db)
            .await?;

        let mut by_workout: HashMap<WorkoutId, Vec<WorkoutExercise>> = HashMap::new();
        for row in rows {
            by_workout.entry(row.workout_id).or_default().push(row);
        }

        Ok(workouts
            .into_iter()
            .map(|workout| {
                let rows = by_workout.remove(&workout.id).unwrap_or_default();
                WorkoutWithExercises::new(workout, rows)
            })
            .collect())
    }
}
