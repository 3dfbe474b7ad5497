use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::app::AppState;
use crate::db::comments::{Comment, CommentRepository};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub author: String,
    pub body: String,
}

/// Axum handler for `GET /api/posts/{id}/comments`.
pub async fn list_comments_handler(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let comments = state.comments.list_for_post(&post_id).await?;
    Ok(Json(comments))
}

/// Axum handler for `POST /api/posts/{id}/comments`.
pub async fn create_comment_handler(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let comment = build_comment(&post_id, request)?;
    state.comments.append(comment.clone()).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// Validate a submission and stamp the server-assigned fields.
fn build_comment(post_id: &str, request: CreateCommentRequest) -> Result<Comment, AppError> {
    if request.author.trim().is_empty() {
        return Err(AppError::BadRequest("Author cannot be empty".to_string()));
    }
    if request.body.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Comment body cannot be empty".to_string(),
        ));
    }

    Ok(Comment {
        id: uuid::Uuid::new_v4().to_string(),
        post_id: post_id.to_string(),
        author: request.author,
        body: request.body,
        created_at: Utc::now(),
    })
}
