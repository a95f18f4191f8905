use axum::{Json, extract::State};
use tracing::instrument;

use ironlog_core::AppError;

use crate::modules::categories::model::Category;
use crate::modules::categories::service::CategoryService;
use crate::state::AppState;

/// List exercise categories
#[utoipa::path(
    get,
    path = "/categories",
    responses((status = 200, description = "All categories, by name", body = Vec<Category>)),
    tag = "Catalog"
)]
#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    Ok(Json(CategoryService::list(&state.db).await?))
}
