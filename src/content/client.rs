use async_trait::async_trait;
use serde::Deserialize;

use crate::config::ContentServiceConfig;
use crate::content::types::{BlogPostSummary, PostContent, ProjectSummary};
use crate::error::AppError;

/// Trait for the hosted content service, enabling mock testing.
///
/// The service owns the canonical blog and project data; this process never
/// persists content itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// List blog post summaries, filtered server-side by language.
    async fn list_blog_posts(&self, language: &str) -> Result<Vec<BlogPostSummary>, AppError>;

    /// List all project summaries.
    async fn list_projects(&self) -> Result<Vec<ProjectSummary>, AppError>;

    /// Fetch the full block content of one post. Returns `None` for an
    /// unknown id.
    async fn get_blog_post_content(&self, id: &str) -> Result<Option<PostContent>, AppError>;
}

/// REST implementation of the ContentStore.
pub struct HttpContentStore {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
    blog_collection: String,
    project_collection: String,
}

#[derive(Deserialize)]
struct ItemsEnvelope<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

impl HttpContentStore {
    pub fn new(cfg: &ContentServiceConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ContentService(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_token: cfg.api_token.clone(),
            blog_collection: cfg.blog_collection.clone(),
            project_collection: cfg.project_collection.clone(),
        })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_token)
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn list_blog_posts(&self, language: &str) -> Result<Vec<BlogPostSummary>, AppError> {
        let envelope: ItemsEnvelope<BlogPostSummary> = self
            .get(&format!("/collections/{}/items", self.blog_collection))
            .query(&[("language", language)])
            .send()
            .await
            .map_err(|e| AppError::ContentService(format!("Failed to list blog posts: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::ContentService(format!("Blog listing rejected: {e}")))?
            .json()
            .await
            .map_err(|e| AppError::ContentService(format!("Malformed blog listing: {e}")))?;

        Ok(envelope.items)
    }

    async fn list_projects(&self) -> Result<Vec<ProjectSummary>, AppError> {
        let envelope: ItemsEnvelope<ProjectSummary> = self
            .get(&format!("/collections/{}/items", self.project_collection))
            .send()
            .await
            .map_err(|e| AppError::ContentService(format!("Failed to list projects: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::ContentService(format!("Project listing rejected: {e}")))?
            .json()
            .await
            .map_err(|e| AppError::ContentService(format!("Malformed project listing: {e}")))?;

        Ok(envelope.items)
    }

    async fn get_blog_post_content(&self, id: &str) -> Result<Option<PostContent>, AppError> {
        let response = self
            .get(&format!("/items/{id}/content"))
            .send()
            .await
            .map_err(|e| AppError::ContentService(format!("Failed to fetch content '{id}': {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let content = response
            .error_for_status()
            .map_err(|e| AppError::ContentService(format!("Content fetch '{id}' rejected: {e}")))?
            .json()
            .await
            .map_err(|e| AppError::ContentService(format!("Malformed content '{id}': {e}")))?;

        Ok(Some(content))
    }
}
