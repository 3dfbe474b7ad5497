use axum::extract::State;
use axum::Json;

use crate::app::AppState;
use crate::content::types::ProjectSummary;
use crate::error::AppError;

/// Axum handler for `GET /api/projects`.
pub async fn list_projects_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectSummary>>, AppError> {
    let projects = state.content.list_projects().await?;
    Ok(Json(projects))
}
