use std::collections::HashMap;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;

use crate::content::client::ContentStore;
use crate::content::text::extract_text;
use crate::content::types::{BlogPostSummary, ContentBlock, ProjectSummary};
use crate::error::AppError;
use crate::search::scorer;

/// At most this many blog candidates are hydrated with full content per
/// request, to bound the fan-out against the content service.
pub const HYDRATION_LIMIT: usize = 10;

/// Maximum number of results returned to the client.
pub const RESULT_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    Blog,
    Project,
}

/// A blog post or project being evaluated against a search query.
/// Request-local; discarded once the response is serialized.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    #[serde(rename = "type")]
    pub kind: CandidateKind,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "readTime")]
    pub read_time: Option<String>,
    #[serde(skip)]
    pub content: Vec<ContentBlock>,
    pub score: u32,
}

impl Candidate {
    pub fn from_post(post: BlogPostSummary) -> Self {
        Self {
            id: post.id,
            slug: post.slug,
            title: post.title,
            excerpt: post.excerpt,
            kind: CandidateKind::Blog,
            date: post.date,
            tags: Some(post.tags),
            technologies: None,
            read_time: Some(post.read_time),
            content: Vec::new(),
            score: 0,
        }
    }

    pub fn from_project(project: ProjectSummary, now: DateTime<Utc>) -> Self {
        // Projects without an explicit date fall back to the service's
        // creation timestamp, then to the current time.
        let date = project
            .date
            .or(project.created_time)
            .unwrap_or_else(|| now.to_rfc3339());

        Self {
            id: project.id,
            slug: project.slug,
            title: project.title,
            excerpt: project.description,
            kind: CandidateKind::Project,
            date,
            tags: None,
            technologies: Some(project.technologies),
            read_time: None,
            content: Vec::new(),
            score: 0,
        }
    }

    /// The tag-like field relevant for this candidate's kind. The scorer
    /// treats blog tags and project technologies uniformly.
    pub fn tag_like(&self) -> &[String] {
        self.tags
            .as_deref()
            .or(self.technologies.as_deref())
            .unwrap_or(&[])
    }

    /// Coarse whole-query pre-filter over the candidate's metadata.
    /// Intentionally looser than the per-word scorer: it matches the raw
    /// lowercased query as one substring.
    fn matches_metadata(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self
                .tag_like()
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub results: Vec<Candidate>,
    pub count: usize,
    pub query: String,
}

impl SearchOutcome {
    fn empty(query: &str) -> Self {
        Self {
            results: Vec::new(),
            count: 0,
            query: query.to_string(),
        }
    }
}

/// Execute a search request end to end: fetch candidates, pre-filter,
/// hydrate the top blog candidates, score, sort, truncate.
///
/// Source and hydration failures degrade to empty data instead of failing
/// the request; see the error taxonomy in DESIGN.md.
pub async fn run_search(
    store: &dyn ContentStore,
    query: &str,
    language: &str,
) -> Result<SearchOutcome, AppError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(SearchOutcome::empty(query));
    }

    // Both listings fetch concurrently; either may fail without taking the
    // request down.
    let (posts, projects) = tokio::join!(store.list_blog_posts(language), store.list_projects());
    let posts = posts.unwrap_or_else(|e| {
        tracing::error!("Blog post listing failed, searching without posts: {e}");
        Vec::new()
    });
    let projects = projects.unwrap_or_else(|e| {
        tracing::error!("Project listing failed, searching without projects: {e}");
        Vec::new()
    });

    let now = Utc::now();
    let mut candidates: Vec<Candidate> = posts
        .into_iter()
        .map(Candidate::from_post)
        .chain(projects.into_iter().map(|p| Candidate::from_project(p, now)))
        .collect();

    let needle = query.to_lowercase();
    candidates.retain(|c| c.matches_metadata(&needle));

    hydrate_blog_candidates(store, &mut candidates).await;

    for candidate in candidates.iter_mut() {
        let body = extract_text(&candidate.content);
        let score = scorer::score(candidate, query, &body);
        candidate.score = score;
    }

    candidates.retain(|c| c.score > 0);
    candidates.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| sort_timestamp(b).cmp(&sort_timestamp(a)))
    });
    candidates.truncate(RESULT_LIMIT);

    Ok(SearchOutcome {
        count: candidates.len(),
        query: query.to_string(),
        results: candidates,
    })
}

/// Fetch full content for the first `HYDRATION_LIMIT` blog candidates, in
/// their current order. Fetches run concurrently and each is individually
/// guarded: a failed or missing fetch keeps the candidate with empty
/// content. Projects are never hydrated.
async fn hydrate_blog_candidates(store: &dyn ContentStore, candidates: &mut [Candidate]) {
    let ids: Vec<String> = candidates
        .iter()
        .filter(|c| c.kind == CandidateKind::Blog)
        .take(HYDRATION_LIMIT)
        .map(|c| c.id.clone())
        .collect();

    let fetches = ids
        .iter()
        .map(|id| async move { (id.as_str(), store.get_blog_post_content(id).await) });

    let mut hydrated: HashMap<&str, Vec<ContentBlock>> = HashMap::new();
    for (id, outcome) in join_all(fetches).await {
        match outcome {
            Ok(Some(content)) => {
                hydrated.insert(id, content.content);
            }
            Ok(None) => {
                tracing::warn!("No content found for post {id}, scoring metadata only");
            }
            Err(e) => {
                tracing::warn!("Content fetch failed for post {id}, scoring metadata only: {e}");
            }
        }
    }

    // Attach in place, so each candidate keeps exactly one entry in the
    // list whether or not it was hydrated.
    for candidate in candidates.iter_mut() {
        if let Some(blocks) = hydrated.remove(candidate.id.as_str()) {
            candidate.content = blocks;
        }
    }
}

fn sort_timestamp(candidate: &Candidate) -> i64 {
    // Unparseable dates sort after every parseable one at equal score.
    scorer::parse_timestamp(&candidate.date).map_or(i64::MIN, |d| d.timestamp_millis())
}
