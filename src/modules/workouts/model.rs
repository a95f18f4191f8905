pub use ironlog_models::workouts::{
    AdminCreateWorkoutDto, CreateWorkoutDto, PaginatedWorkoutsResponse, UnknownReferencesResponse,
    UpdateWorkoutDto, Workout, WorkoutExercise, WorkoutExerciseInput, WorkoutWithExercises,
};
