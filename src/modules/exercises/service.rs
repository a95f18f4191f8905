use anyhow::anyhow;
use serde_json::json;
use sqlx::PgPool;
use tracing::instrument;

use ironlog_core::file_storage::{FileStorage, StorageError};
use ironlog_core::{AppError, PaginationMeta, PaginationParams};
use ironlog_models::{CategoryId, ExerciseId};

use crate::modules::categories::service::CategoryService;
use crate::modules::exercises::model::{
    CreateExerciseDto, Exercise, PaginatedExercisesResponse, UpdateExerciseDto,
};

const SELECT_EXERCISE: &str = r#"SELECT e.id, e.name, e.description, e.category_id,
          c.name AS category_name, e.image_url, e.created_at, e.updated_at
   FROM exercises e
   JOIN categories c ON c.id = e.category_id"#;

fn map_write_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::bad_request(anyhow!("An exercise with this name already exists"));
        }
        if db_err.is_foreign_key_violation() {
            return AppError::bad_request(anyhow!(
                "Exercise is used by logged workouts and cannot be deleted"
            ));
        }
    }
    AppError::from(e)
}

fn map_storage_error(e: StorageError) -> AppError {
    if e.is_client_error() {
        AppError::bad_request(e)
    } else {
        AppError::internal(e)
    }
}

/// Storage key of an uploaded image: `exercises/<id>-<random>.<ext>`.
fn image_key(id: ExerciseId, ext: &str) -> String {
    use rand::Rng as _;
    let suffix: u64 = rand::thread_rng().r#gen();
    format!("exercises/{}-{:016x}.{}", id, suffix, ext)
}

fn exercise_not_found() -> AppError {
    AppError::not_found(anyhow!("Exercise not found"))
}

pub struct ExerciseService;

impl ExerciseService {
    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        params: PaginationParams,
    ) -> Result<PaginatedExercisesResponse, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM exercises")
            .fetch_one(db)
            .await?;

        let data = sqlx::query_as::<_, Exercise>(&format!(
            "{SELECT_EXERCISE} ORDER BY e.name LIMIT $1 OFFSET $2"
        ))
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(db)
        .await?;

        Ok(PaginatedExercisesResponse {
            data,
            meta: PaginationMeta::new(total, &params),
        })
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: ExerciseId) -> Result<Exercise, AppError> {
        sqlx::query_as::<_, Exercise>(&format!("{SELECT_EXERCISE} WHERE e.id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(exercise_not_found)
    }

    /// Case-insensitive lookup by exact name.
    #[instrument(skip(db))]
    pub async fn get_by_name(db: &PgPool, name: &str) -> Result<Exercise, AppError> {
        sqlx::query_as::<_, Exercise>(&format!(
            "{SELECT_EXERCISE} WHERE LOWER(e.name) = LOWER($1)"
        ))
        .bind(name.trim())
        .fetch_optional(db)
        .await?
        .ok_or_else(exercise_not_found)
    }

    /// Exercises of the named category. An unknown category is a 404.
    #[instrument(skip(db))]
    pub async fn list_by_category(
        db: &PgPool,
        category_name: &str,
    ) -> Result<Vec<Exercise>, AppError> {
        let category = CategoryService::find_by_name(db, category_name)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Category not found")))?;

        let exercises = sqlx::query_as::<_, Exercise>(&format!(
            "{SELECT_EXERCISE} WHERE e.category_id = $1 ORDER BY e.name"
        ))
        .bind(category.id)
        .fetch_all(db)
        .await?;

        Ok(exercises)
    }

    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, dto: CreateExerciseDto) -> Result<Exercise, AppError> {
        let category_id = Self::resolve_category(db, &dto.category_name).await?;

        let id = sqlx::query_scalar::<_, ExerciseId>(
            r#"INSERT INTO exercises (name, description, category_id)
               VALUES ($1, $2, $3)
               RETURNING id"#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(category_id)
        .fetch_one(db)
        .await
        .map_err(map_write_error)?;

        tracing::info!(exercise_id = %id, name = %dto.name, "Exercise created");
        Self::get(db, id).await
    }

    #[instrument(skip(db))]
    pub async fn update(
        db: &PgPool,
        id: ExerciseId,
        dto: UpdateExerciseDto,
    ) -> Result<Exercise, AppError> {
        let existing = Self::get(db, id).await?;

        let category_id = match &dto.category_name {
            Some(name) => Self::resolve_category(db, name).await?,
            None => existing.category_id,
        };

        sqlx::query(
            r#"UPDATE exercises
               SET name = $2, description = $3, category_id = $4, updated_at = NOW()
               WHERE id = $1"#,
        )
        .bind(id)
        .bind(dto.name.unwrap_or(existing.name))
        .bind(dto.description.or(existing.description))
        .bind(category_id)
        .execute(db)
        .await
        .map_err(map_write_error)?;

        Self::get(db, id).await
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: ExerciseId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(exercise_not_found());
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_by_name(db: &PgPool, name: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM exercises WHERE LOWER(name) = LOWER($1)")
            .bind(name.trim())
            .execute(db)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(exercise_not_found());
        }

        Ok(())
    }

    /// Records the public URL of an uploaded image.
    #[instrument(skip(db))]
    async fn set_image(db: &PgPool, id: ExerciseId, url: &str) -> Result<Exercise, AppError> {
        let result =
            sqlx::query("UPDATE exercises SET image_url = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(url)
                .execute(db)
                .await?;

        if result.rows_affected() == 0 {
            return Err(exercise_not_found());
        }

        Self::get(db, id).await
    }

    /// Stores an uploaded image for the exercise and records its URL.
    #[instrument(skip(db, storage, content), fields(bytes = content.len()))]
    pub async fn upload_image(
        db: &PgPool,
        storage: &dyn FileStorage,
        id: ExerciseId,
        content_type: &str,
        content: &[u8],
    ) -> Result<Exercise, AppError> {
        Self::get(db, id).await?;

        let ext = storage
            .check_upload(content_type, content.len())
            .map_err(map_storage_error)?;
        let key = storage
            .save(&image_key(id, ext), content)
            .await
            .map_err(map_storage_error)?;
        let url = storage.get_url(&key).map_err(map_storage_error)?;

        tracing::info!(exercise_id = %id, key = %key, "Exercise image stored");
        Self::set_image(db, id, &url).await
    }

    async fn resolve_category(db: &PgPool, name: &str) -> Result<CategoryId, AppError> {
        match CategoryService::find_by_name(db, name).await? {
            Some(category) => Ok(category.id),
            None => Err(AppError::validation(
                format!("Category '{}' does not exist", name),
                json!([name]),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_key_is_unique_per_upload() {
        let id = ExerciseId::new();
        let first = image_key(id, "png");
        let second = image_key(id, "png");

        assert!(first.starts_with(&format!("exercises/{}-", id)));
        assert!(first.ends_with(".png"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_rejected_upload_is_a_client_error() {
        let err = map_storage_error(StorageError::InvalidFileSize { max_bytes: 10 });
        assert_eq!(err.status.as_u16(), 400);

        let err = map_storage_error(StorageError::InvalidKey("bad".to_string()));
        assert_eq!(err.status.as_u16(), 500);
    }
}
