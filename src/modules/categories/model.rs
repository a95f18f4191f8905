pub use ironlog_models::catalog::{Category, CreateCategoryDto, UpdateCategoryDto};
