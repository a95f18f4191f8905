//! Lookups the authorization pipeline depends on.
//!
//! Handlers and gates are written against [`IdentityStore`] and
//! [`OwnershipStore`]; the server uses [`PgAuthStore`] for both and tests
//! substitute in-memory maps.

use std::fmt;
use std::future::Future;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use ironlog_core::AppError;

use crate::role::Role;

/// A stored account. The password hash never leaves this struct through
/// `Debug` or serialization.
#[derive(Clone, sqlx::FromRow)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// User-scoped resources whose owner the ownership gate checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Workout,
    ProgressLog,
}

impl ResourceKind {
    pub fn table(&self) -> &'static str {
        match self {
            ResourceKind::Workout => "workouts",
            ResourceKind::ProgressLog => "progress_logs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Workout => "Workout",
            ResourceKind::ProgressLog => "Progress log",
        }
    }
}

pub trait IdentityStore: Send + Sync {
    fn find_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Identity>, AppError>> + Send;

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Identity>, AppError>> + Send;
}

pub trait OwnershipStore: Send + Sync {
    /// Returns the owner of the resource, or `None` if it does not exist.
    fn find_owner_id(
        &self,
        kind: ResourceKind,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Uuid>, AppError>> + Send;
}

#[derive(Clone, Debug)]
pub struct PgAuthStore {
    pool: PgPool,
}

impl PgAuthStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl IdentityStore for PgAuthStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Identity>, AppError> {
        let identity = sqlx::query_as::<_, Identity>(
            "SELECT id, email, password, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(identity)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AppError> {
        let identity = sqlx::query_as::<_, Identity>(
            "SELECT id, email, password, role, created_at FROM users WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(identity)
    }
}

impl OwnershipStore for PgAuthStore {
    async fn find_owner_id(&self, kind: ResourceKind, id: Uuid) -> Result<Option<Uuid>, AppError> {
        let query = format!("SELECT user_id FROM {} WHERE id = $1", kind.table());

        let owner = sqlx::query_scalar::<_, Uuid>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(owner)
    }
}
