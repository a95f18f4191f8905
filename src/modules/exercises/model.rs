pub use ironlog_models::catalog::{
    CreateExerciseDto, Exercise, ExerciseImageResponse, PaginatedExercisesResponse,
    UpdateExerciseDto,
};
