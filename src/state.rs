use std::sync::Arc;

use ironlog_auth::PgAuthStore;
use ironlog_config::{CorsConfig, JwtConfig, RateLimitConfig, StorageConfig};
use ironlog_core::file_storage::{FileStorage, LocalFileStorage};
use sqlx::PgPool;

/// Everything a handler needs, built once in `main` and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
    pub storage_config: StorageConfig,
    pub storage: Arc<dyn FileStorage>,
    pub auth_store: PgAuthStore,
}

impl AppState {
    /// Builds the state around `db`, serving uploads from local disk.
    pub fn new(
        db: PgPool,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        rate_limit_config: RateLimitConfig,
        storage_config: StorageConfig,
    ) -> Self {
        let storage = LocalFileStorage::with_max_size(
            storage_config.upload_dir.clone(),
            storage_config.public_base_url.clone(),
            storage_config.max_upload_bytes,
        );

        Self {
            auth_store: PgAuthStore::new(db.clone()),
            db,
            jwt_config,
            cors_config,
            rate_limit_config,
            storage_config,
            storage: Arc::new(storage),
        }
    }
}

pub async fn init_app_state() -> Result<AppState, sqlx::Error> {
    let db = ironlog_db::init_db_pool().await?;

    Ok(AppState::new(
        db,
        JwtConfig::from_env(),
        CorsConfig::from_env(),
        RateLimitConfig::from_env(),
        StorageConfig::from_env(),
    ))
}
