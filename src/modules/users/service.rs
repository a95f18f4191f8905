use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use ironlog_core::AppError;
use ironlog_models::UserId;

use crate::modules::users::model::User;

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: UserId) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, role, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }

    #[instrument(skip(db))]
    pub async fn exists(db: &PgPool, id: UserId) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(id)
                .fetch_one(db)
                .await?;
        Ok(exists)
    }
}
