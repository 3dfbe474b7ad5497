use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::db::comments::CommentRepository;
use crate::content::client::ContentStore;
use crate::mail::client::Mailer;

/// Shared handler state: the injected collaborators behind every API route.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentStore>,
    pub comments: Arc<dyn CommentRepository>,
    pub mailer: Arc<dyn Mailer>,
}

/// Assemble the API router. Static-asset fallback and middleware layers are
/// added by the binary so tests can drive the bare API surface.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(crate::api::search::search_handler))
        .route("/api/posts", get(crate::api::posts::list_posts_handler))
        .route(
            "/api/posts/{id}/content",
            get(crate::api::posts::post_content_handler),
        )
        .route(
            "/api/posts/{id}/comments",
            get(crate::api::comments::list_comments_handler)
                .post(crate::api::comments::create_comment_handler),
        )
        .route(
            "/api/projects",
            get(crate::api::projects::list_projects_handler),
        )
        .route("/api/tags", get(crate::api::posts::list_tags_handler))
        .route(
            "/api/contact",
            axum::routing::post(crate::api::contact::contact_handler),
        )
        .with_state(state)
}
