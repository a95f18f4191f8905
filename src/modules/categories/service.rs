use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use ironlog_core::AppError;
use ironlog_models::CategoryId;

use crate::modules::categories::model::{Category, CreateCategoryDto, UpdateCategoryDto};

const CATEGORY_COLUMNS: &str = "id, name, description, created_at, updated_at";

fn map_write_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::bad_request(anyhow!("A category with this name already exists"));
        }
        if db_err.is_foreign_key_violation() {
            return AppError::bad_request(anyhow!(
                "Category is still used by exercises and cannot be deleted"
            ));
        }
    }
    AppError::from(e)
}

pub struct CategoryService;

impl CategoryService {
    #[instrument(skip(db))]
    pub async fn list(db: &PgPool) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY name"
        ))
        .fetch_all(db)
        .await?;
        Ok(categories)
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: CategoryId) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Category not found")))
    }

    /// Case-insensitive lookup by name.
    #[instrument(skip(db))]
    pub async fn find_by_name(db: &PgPool, name: &str) -> Result<Option<Category>, AppError> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE LOWER(name) = LOWER($1)"
        ))
        .bind(name.trim())
        .fetch_optional(db)
        .await?;
        Ok(category)
    }

    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, dto: CreateCategoryDto) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(&format!(
            r#"INSERT INTO categories (name, description)
               VALUES ($1, $2)
               RETURNING {CATEGORY_COLUMNS}"#
        ))
        .bind(&dto.name)
        .bind(&dto.description)
        .fetch_one(db)
        .await
        .map_err(map_write_error)?;

        tracing::info!(category_id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }

    #[instrument(skip(db))]
    pub async fn update(
        db: &PgPool,
        id: CategoryId,
        dto: UpdateCategoryDto,
    ) -> Result<Category, AppError> {
        let existing = Self::get(db, id).await?;

        sqlx::query_as::<_, Category>(&format!(
            r#"UPDATE categories SET name = $2, description = $3, updated_at = NOW()
               WHERE id = $1
               RETURNING {CATEGORY_COLUMNS}"#
        ))
        .bind(id)
        .bind(dto.name.unwrap_or(existing.name))
        .bind(dto.description.or(existing.description))
        .fetch_one(db)
        .await
        .map_err(map_write_error)
    }

    /// Deletes a category. Categories still referenced by exercises are kept.
    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: CategoryId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Category not found")));
        }

        Ok(())
    }
}
