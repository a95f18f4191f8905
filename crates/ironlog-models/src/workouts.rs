//! Logged workouts.
//!
//! A workout belongs to one user and holds one row per exercise performed.
//! Create and update requests carry the complete list of rows; an update
//! replaces the previous rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use ironlog_core::PaginationMeta;

use crate::ids::{ExerciseId, UserId, WorkoutExerciseId, WorkoutId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: WorkoutId,
    pub user_id: UserId,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub id: WorkoutExerciseId,
    pub workout_id: WorkoutId,
    pub exercise_id: ExerciseId,
    pub exercise_name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutWithExercises {
    pub id: WorkoutId,
    pub user_id: UserId,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub exercises: Vec<WorkoutExercise>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkoutWithExercises {
    pub fn new(workout: Workout, exercises: Vec<WorkoutExercise>) -> Self {
        Self {
            id: workout.id,
            user_id: workout.user_id,
            date: workout.date,
            notes: workout.notes,
            exercises,
            created_at: workout.created_at,
            updated_at: workout.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExerciseInput {
    pub exercise_id: ExerciseId,
    #[validate(range(min = 1))]
    #[schema(example = 4)]
    pub sets: i32,
    #[validate(range(min = 1))]
    #[schema(example = 10)]
    pub reps: i32,
    #[validate(range(min = 0.0))]
    #[schema(example = 50.0)]
    pub weight: f64,
}

/// Body of `POST /users/workouts`.
///
/// `userId` may be omitted; when present it must name the caller unless
/// the caller is an admin.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutDto {
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub date: DateTime<Utc>,
    #[serde(default, deserialize_with = "ironlog_core::de::optional_sanitized")]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
    #[validate(length(min = 1, message = "must contain at least one exercise"), nested)]
    pub exercises: Vec<WorkoutExerciseInput>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkoutDto {
    pub date: DateTime<Utc>,
    #[serde(default, deserialize_with = "ironlog_core::de::optional_sanitized")]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
    #[validate(length(min = 1, message = "must contain at least one exercise"), nested)]
    pub exercises: Vec<WorkoutExerciseInput>,
}

/// Body of `POST /admin/workouts`, logging a workout for any existing user.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateWorkoutDto {
    pub user_id: UserId,
    pub date: DateTime<Utc>,
    #[serde(default, deserialize_with = "ironlog_core::de::optional_sanitized")]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
    #[validate(length(min = 1, message = "must contain at least one exercise"), nested)]
    pub exercises: Vec<WorkoutExerciseInput>,
}

impl From<AdminCreateWorkoutDto> for UpdateWorkoutDto {
    fn from(dto: AdminCreateWorkoutDto) -> Self {
        Self {
            date: dto.date,
            notes: dto.notes,
            exercises: dto.exercises,
        }
    }
}

impl From<CreateWorkoutDto> for UpdateWorkoutDto {
    fn from(dto: CreateWorkoutDto) -> Self {
        Self {
            date: dto.date,
            notes: dto.notes,
            exercises: dto.exercises,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedWorkoutsResponse {
    pub data: Vec<WorkoutWithExercises>,
    pub meta: PaginationMeta,
}

/// Rejection body when a request references entities that do not exist,
/// e.g. `{"error": "Invalid exercise IDs", "details": ["c26c7249-..."]}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnknownReferencesResponse {
    pub error: String,
    /// The offending values, in request order.
    pub details: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_workout_parses_original_payload() {
        let dto: CreateWorkoutDto = serde_json::from_str(
            r#"{
                "date": "2025-03-03T08:30:00.000Z",
                "exercises": [
                    {"exerciseId": "c26c7249-7102-4643-9523-677d6134e5a2", "sets": 4, "reps": 10, "weight": 50}
                ]
            }"#,
        )
        .unwrap();

        assert!(dto.user_id.is_none());
        assert_eq!(dto.exercises.len(), 1);
        assert_eq!(dto.exercises[0].weight, 50.0);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_row_minimums() {
        let dto = UpdateWorkoutDto {
            date: Utc::now(),
            notes: None,
            exercises: vec![WorkoutExerciseInput {
                exercise_id: ExerciseId::new(),
                sets: 0,
                reps: 0,
                weight: -2.5,
            }],
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.errors().contains_key("exercises"));
    }

    #[test]
    fn test_row_errors_are_reported_by_path() {
        let dto = CreateWorkoutDto {
            user_id: None,
            date: Utc::now(),
            notes: None,
            exercises: vec![
                WorkoutExerciseInput {
                    exercise_id: ExerciseId::new(),
                    sets: 3,
                    reps: 8,
                    weight: 40.0,
                },
                WorkoutExerciseInput {
                    exercise_id: ExerciseId::new(),
                    sets: 0,
                    reps: 8,
                    weight: 40.0,
                },
            ],
        };

        let details = ironlog_core::validate_payload(&dto)
            .unwrap_err()
            .details
            .unwrap();
        assert_eq!(details["exercises[1].sets"], serde_json::json!(["must be at least 1"]));
        assert!(details.get("exercises[0].sets").is_none());
    }

    #[test]
    fn test_notes_length_counts_plain_characters() {
        let notes = "<".repeat(1000);
        let body = serde_json::json!({
            "date": "2025-03-03T08:30:00Z",
            "notes": notes,
            "exercises": [
                {"exerciseId": "c26c7249-7102-4643-9523-677d6134e5a2", "sets": 1, "reps": 1, "weight": 0}
            ]
        });

        let dto: CreateWorkoutDto = serde_json::from_value(body).unwrap();
        assert_eq!(dto.notes.as_deref().map(str::len), Some(1000));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_empty_exercise_list_is_rejected() {
        let dto = UpdateWorkoutDto {
            date: Utc::now(),
            notes: None,
            exercises: vec![],
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_non_uuid_exercise_id_fails_to_deserialize() {
        let result = serde_json::from_str::<CreateWorkoutDto>(
            r#"{"date":"2025-03-03T08:30:00Z","exercises":[{"exerciseId":"abc","sets":1,"reps":1,"weight":0}]}"#,
        );
        assert!(result.is_err());
    }
}
