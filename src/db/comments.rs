use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A reader comment attached to a blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Server-assigned UUID.
    pub id: String,
    /// The post this comment belongs to.
    pub post_id: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Repository trait for comment storage.
///
/// Injected through `AppState` so the backing store stays an explicit,
/// swappable dependency rather than process-global state.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// All comments for one post, oldest first. Unknown posts yield an
    /// empty list.
    async fn list_for_post(&self, post_id: &str) -> Result<Vec<Comment>, AppError>;

    /// Append a comment to its post's thread.
    async fn append(&self, comment: Comment) -> Result<(), AppError>;
}

/// In-memory implementation. Contents live for the process lifetime only;
/// a durable deployment swaps this for a database-backed repository.
#[derive(Default)]
pub struct InMemoryCommentStore {
    threads: RwLock<HashMap<String, Vec<Comment>>>,
}

impl InMemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentStore {
    async fn list_for_post(&self, post_id: &str) -> Result<Vec<Comment>, AppError> {
        let threads = self
            .threads
            .read()
            .map_err(|_| AppError::Internal("Comment store lock poisoned".to_string()))?;

        Ok(threads.get(post_id).cloned().unwrap_or_default())
    }

    async fn append(&self, comment: Comment) -> Result<(), AppError> {
        let mut threads = self
            .threads
            .write()
            .map_err(|_| AppError::Internal("Comment store lock poisoned".to_string()))?;

        threads
            .entry(comment.post_id.clone())
            .or_default()
            .push(comment);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(post_id: &str, body: &str) -> Comment {
        Comment {
            id: uuid::Uuid::new_v4().to_string(),
            post_id: post_id.to_string(),
            author: "ada".to_string(),
            body: body.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_append_then_list_preserves_order() {
        let store = InMemoryCommentStore::new();
        store.append(comment("post-1", "first")).await.unwrap();
        store.append(comment("post-1", "second")).await.unwrap();

        let listed = store.list_for_post("post-1").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].body, "first");
        assert_eq!(listed[1].body, "second");
    }

    #[tokio::test]
    async fn test_threads_are_isolated_per_post() {
        let store = InMemoryCommentStore::new();
        store.append(comment("post-1", "hello")).await.unwrap();

        let other = store.list_for_post("post-2").await.unwrap();
        assert!(other.is_empty());
    }
}
