pub use ironlog_models::progress::{
    CreateProgressDto, PaginatedProgressResponse, ProgressFilterParams, ProgressLog,
    ProgressMetric, UpdateProgressDto,
};
