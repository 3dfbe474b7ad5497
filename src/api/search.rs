use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::app::AppState;
use crate::error::AppError;
use crate::search::engine::{run_search, SearchOutcome};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "English".to_string()
}

/// Axum handler for `GET /api/search`.
///
/// An empty or whitespace-only query is a successful empty result, not an
/// error. Anything that escapes the orchestrator surfaces as a 500 through
/// the AppError responder.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchOutcome>, AppError> {
    let outcome = run_search(state.content.as_ref(), &params.q, &params.language).await?;
    Ok(Json(outcome))
}
