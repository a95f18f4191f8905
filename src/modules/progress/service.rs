use anyhow::anyhow;
use serde_json::json;
use sqlx::PgPool;
use tracing::instrument;

use ironlog_core::validation::VALIDATION_FAILED;
use ironlog_core::{AppError, PaginationMeta};
use ironlog_models::{ExerciseId, ProgressLogId, UserId};

use crate::modules::progress::model::{
    CreateProgressDto, PaginatedProgressResponse, ProgressFilterParams, ProgressLog,
    ProgressMetric, UpdateProgressDto,
};

const PROGRESS_COLUMNS: &str =
    "id, user_id, exercise_id, metric, value, notes, logged_at, created_at, updated_at";

pub const INVALID_EXERCISE_ID: &str = "Invalid exercise ID";

fn exercise_required(metric: ProgressMetric) -> AppError {
    AppError::validation(
        VALIDATION_FAILED,
        json!({ "exerciseId": [format!("is required for {}", metric_name(metric))] }),
    )
}

fn metric_name(metric: ProgressMetric) -> String {
    serde_json::to_value(metric)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default()
}

pub struct ProgressService;

impl ProgressService {
    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        owner: UserId,
        filters: ProgressFilterParams,
    ) -> Result<PaginatedProgressResponse, AppError> {
        let params = filters.pagination;

        let total = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM progress_logs
               WHERE user_id = $1 AND ($2::progress_metric IS NULL OR metric = $2)"#,
        )
        .bind(owner)
        .bind(filters.metric)
        .fetch_one(db)
        .await?;

        let data = sqlx::query_as::<_, ProgressLog>(&format!(
            r#"SELECT {PROGRESS_COLUMNS} FROM progress_logs
               WHERE user_id = $1 AND ($2::progress_metric IS NULL OR metric = $2)
               ORDER BY logged_at DESC, created_at DESC
               LIMIT $3 OFFSET $4"#
        ))
        .bind(owner)
        .bind(filters.metric)
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(db)
        .await?;

        Ok(PaginatedProgressResponse {
            data,
            meta: PaginationMeta::new(total, &params),
        })
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: ProgressLogId) -> Result<ProgressLog, AppError> {
        sqlx::query_as::<_, ProgressLog>(&format!(
            "SELECT {PROGRESS_COLUMNS} FROM progress_logs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Progress log not found")))
    }

    #[instrument(skip(db, dto), fields(metric = ?dto.metric))]
    pub async fn create(
        db: &PgPool,
        owner: UserId,
        dto: CreateProgressDto,
    ) -> Result<ProgressLog, AppError> {
        if dto.metric.requires_exercise() && dto.exercise_id.is_none() {
            return Err(exercise_required(dto.metric));
        }
        if let Some(exercise_id) = dto.exercise_id {
            Self::check_exercise(db, exercise_id).await?;
        }

        let log = sqlx::query_as::<_, ProgressLog>(&format!(
            r#"INSERT INTO progress_logs (user_id, exercise_id, metric, value, notes, logged_at)
               VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()))
               RETURNING {PROGRESS_COLUMNS}"#
        ))
        .bind(owner)
        .bind(dto.exercise_id)
        .bind(dto.metric)
        .bind(dto.value)
        .bind(&dto.notes)
        .bind(dto.logged_at)
        .fetch_one(db)
        .await?;

        tracing::info!(progress_id = %log.id, user_id = %owner, "Progress recorded");
        Ok(log)
    }

    /// Applies the fields present in `dto`. The merged entry must still
    /// satisfy the metric's exercise requirement.
    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        id: ProgressLogId,
        dto: UpdateProgressDto,
    ) -> Result<ProgressLog, AppError> {
        let existing = Self::get(db, id).await?;

        let metric = dto.metric.unwrap_or(existing.metric);
        let exercise_id = dto.exercise_id.or(existing.exercise_id);
        if metric.requires_exercise() && exercise_id.is_none() {
            return Err(exercise_required(metric));
        }
        if let Some(exercise_id) = dto.exercise_id {
            Self::check_exercise(db, exercise_id).await?;
        }

        let log = sqlx::query_as::<_, ProgressLog>(&format!(
            r#"UPDATE progress_logs
               SET metric = $2, value = $3, exercise_id = $4, notes = $5, logged_at = $6,
                   updated_at = NOW()
               WHERE id = $1
               RETURNING {PROGRESS_COLUMNS}"#
        ))
        .bind(id)
        .bind(metric)
        .bind(dto.value.unwrap_or(existing.value))
        .bind(exercise_id)
        .bind(dto.notes.or(existing.notes))
        .bind(dto.logged_at.unwrap_or(existing.logged_at))
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Progress log not found")))?;

        Ok(log)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: ProgressLogId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM progress_logs WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Progress log not found")));
        }

        Ok(())
    }

    async fn check_exercise(db: &PgPool, id: ExerciseId) -> Result<(), AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM exercises WHERE id = $1)")
                .bind(id)
                .fetch_one(db)
                .await?;

        if exists {
            Ok(())
        } else {
            Err(AppError::validation(INVALID_EXERCISE_ID, json!([id.to_string()])))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_required_names_the_field() {
        let err = exercise_required(ProgressMetric::OneRepMax);
        assert_eq!(err.status.as_u16(), 400);
        assert_eq!(
            err.details.unwrap()["exerciseId"],
            json!(["is required for one_rep_max"])
        );
    }
}
