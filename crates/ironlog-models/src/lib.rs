//! # Ironlog Models
//!
//! Database entities and request/response DTOs for the Ironlog API.
//!
//! All API types serialize with camelCase field names. Request DTOs derive
//! `validator::Validate`; their free-text fields are sanitized while they
//! are deserialized, so validation and storage only ever see clean text.
//!
//! # Modules
//!
//! - [`ids`]: typed UUID wrappers per entity
//! - [`users`]: accounts, signup and login
//! - [`catalog`]: categories and exercises
//! - [`workouts`]: logged workouts and their exercise rows
//! - [`progress`]: body and performance measurements

pub mod catalog;
pub mod ids;
pub mod progress;
pub mod users;
pub mod workouts;

// Re-export commonly used types at crate root for convenience
pub use catalog::{
    Category, CreateCategoryDto, CreateExerciseDto, Exercise, ExerciseImageResponse,
    PaginatedExercisesResponse, UpdateCategoryDto, UpdateExerciseDto,
};
pub use ids::{CategoryId, ExerciseId, ProgressLogId, UserId, WorkoutExerciseId, WorkoutId};
pub use progress::{
    CreateProgressDto, PaginatedProgressResponse, ProgressFilterParams, ProgressLog,
    ProgressMetric, UpdateProgressDto,
};
pub use users::{
    LoginRequest, LoginResponse, MessageResponse, SignupRequest, SignupResponse, User,
};
pub use workouts::{
    AdminCreateWorkoutDto, CreateWorkoutDto, PaginatedWorkoutsResponse, UnknownReferencesResponse,
    UpdateWorkoutDto, Workout, WorkoutExercise, WorkoutExerciseInput, WorkoutWithExercises,
};
