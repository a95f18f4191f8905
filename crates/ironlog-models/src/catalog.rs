//! Exercise catalog: categories and exercises.
//!
//! Categories are looked up by name when an exercise is created, so the
//! request carries `categoryName` rather than an id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use ironlog_core::PaginationMeta;
use ironlog_core::validation::not_blank;

use crate::ids::{CategoryId, ExerciseId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[serde(deserialize_with = "ironlog_core::de::sanitized")]
    #[validate(length(min = 2, max = 50))]
    #[schema(example = "Mobility")]
    pub name: String,
    #[serde(default, deserialize_with = "ironlog_core::de::optional_sanitized")]
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[serde(default, deserialize_with = "ironlog_core::de::optional_sanitized")]
    #[validate(length(min = 2, max = 50))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "ironlog_core::de::optional_sanitized")]
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// A catalog exercise joined with the name of its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub category_name: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExerciseDto {
    #[serde(deserialize_with = "ironlog_core::de::sanitized")]
    #[validate(length(min = 2, max = 100, message = "Exercise name must be at least 2 characters"))]
    #[schema(example = "Bench Press")]
    pub name: String,
    #[serde(default, deserialize_with = "ironlog_core::de::optional_sanitized")]
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[serde(deserialize_with = "ironlog_core::de::sanitized")]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Strength")]
    pub category_name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExerciseDto {
    #[serde(default, deserialize_with = "ironlog_core::de::optional_sanitized")]
    #[validate(length(min = 2, max = 100, message = "Exercise name must be at least 2 characters"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "ironlog_core::de::optional_sanitized")]
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "ironlog_core::de::optional_sanitized")]
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedExercisesResponse {
    pub data: Vec<Exercise>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseImageResponse {
    pub message: String,
    pub exercise: Exercise,
}
