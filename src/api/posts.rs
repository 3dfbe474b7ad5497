use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::content::types::{BlogPostSummary, PostContent};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "English".to_string()
}

/// Axum handler for `GET /api/posts`.
pub async fn list_posts_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<BlogPostSummary>>, AppError> {
    let posts = state.content.list_blog_posts(&params.language).await?;
    Ok(Json(posts))
}

/// Axum handler for `GET /api/posts/{id}/content`.
pub async fn post_content_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostContent>, AppError> {
    let content = state
        .content
        .get_blog_post_content(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No post with id '{id}'")))?;

    Ok(Json(content))
}

/// One entry of the tag cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Axum handler for `GET /api/tags` — tag-cloud data for the given language.
pub async fn list_tags_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TagCount>>, AppError> {
    let posts = state.content.list_blog_posts(&params.language).await?;
    Ok(Json(aggregate_tags(&posts)))
}

/// Count tag usage across post summaries, most-used first; ties resolve
/// alphabetically so the cloud renders stably between requests.
fn aggregate_tags(posts: &[BlogPostSummary]) -> Vec<TagCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        for tag in &post.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect();

    tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(tags: &[&str]) -> BlogPostSummary {
        BlogPostSummary {
            id: "p".to_string(),
            slug: "p".to_string(),
            title: "t".to_string(),
            excerpt: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            date: "2023-01-01T00:00:00Z".to_string(),
            read_time: String::new(),
        }
    }

    #[test]
    fn test_aggregate_tags_counts_and_orders() {
        let posts = vec![
            post(&["rust", "web"]),
            post(&["rust"]),
            post(&["axum", "web"]),
        ];

        let tags = aggregate_tags(&posts);
        assert_eq!(
            tags,
            vec![
                TagCount { tag: "rust".to_string(), count: 2 },
                TagCount { tag: "web".to_string(), count: 2 },
                TagCount { tag: "axum".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_aggregate_tags_empty() {
        assert!(aggregate_tags(&[]).is_empty());
    }
}
