//! Progress entries: body measurements and performance records over time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use ironlog_core::{PaginationMeta, PaginationParams};

use crate::ids::{ExerciseId, ProgressLogId, UserId};

/// What a progress entry measures. Stored as the `progress_metric` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[sqlx(type_name = "progress_metric", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProgressMetric {
    BodyWeight,
    BodyFat,
    OneRepMax,
    Distance,
    Duration,
}

impl ProgressMetric {
    /// Whether entries of this metric must reference an exercise.
    pub fn requires_exercise(&self) -> bool {
        matches!(self, ProgressMetric::OneRepMax)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressLog {
    pub id: ProgressLogId,
    pub user_id: UserId,
    pub exercise_id: Option<ExerciseId>,
    pub metric: ProgressMetric,
    pub value: f64,
    pub notes: Option<String>,
    pub logged_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgressDto {
    pub metric: ProgressMetric,
    #[validate(range(min = 0.0))]
    #[schema(example = 82.5)]
    pub value: f64,
    #[serde(default)]
    pub exercise_id: Option<ExerciseId>,
    #[serde(default, deserialize_with = "ironlog_core::de::optional_sanitized")]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
    /// Defaults to the time of the request.
    #[serde(default)]
    pub logged_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressDto {
    #[serde(default)]
    pub metric: Option<ProgressMetric>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub exercise_id: Option<ExerciseId>,
    #[serde(default, deserialize_with = "ironlog_core::de::optional_sanitized")]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
    #[serde(default)]
    pub logged_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProgressFilterParams {
    /// Only return entries of this metric
    pub metric: Option<ProgressMetric>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedProgressResponse {
    pub data: Vec<ProgressLog>,
    pub meta: PaginationMeta,
}
