use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use folio::app::{router, AppState};
use folio::content::client::ContentStore;
use folio::content::types::{
    BlogPostSummary, ContentBlock, PostContent, ProjectSummary, RichTextPayload,
};
use folio::db::comments::InMemoryCommentStore;
use folio::error::AppError;
use folio::mail::client::{ContactMessage, Mailer};

/// Scripted stand-in for the hosted content service.
///
/// Both collaborators of this server are plain HTTP APIs, so integration
/// tests double them in-process instead of launching containers.
pub struct StubContentStore {
    pub posts_by_language: HashMap<String, Vec<BlogPostSummary>>,
    pub projects: Vec<ProjectSummary>,
    pub contents: HashMap<String, PostContent>,
    pub fail_posts: bool,
    pub fail_projects: bool,
}

#[async_trait]
impl ContentStore for StubContentStore {
    async fn list_blog_posts(&self, language: &str) -> Result<Vec<BlogPostSummary>, AppError> {
        if self.fail_posts {
            return Err(AppError::ContentService(
                "stubbed blog listing outage".to_string(),
            ));
        }
        Ok(self
            .posts_by_language
            .get(language)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_projects(&self) -> Result<Vec<ProjectSummary>, AppError> {
        if self.fail_projects {
            return Err(AppError::ContentService(
                "stubbed project listing outage".to_string(),
            ));
        }
        Ok(self.projects.clone())
    }

    async fn get_blog_post_content(&self, id: &str) -> Result<Option<PostContent>, AppError> {
        Ok(self.contents.get(id).cloned())
    }
}

/// Mailer double that records deliveries instead of sending them.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<ContactMessage>>,
    pub fail: bool,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Mail("stubbed email outage".to_string()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Provides the Axum router wired to in-process doubles, plus handles on
/// the doubles for assertions.
pub struct TestEnv {
    pub router: axum::Router,
    pub mailer: Arc<RecordingMailer>,
}

impl TestEnv {
    /// Environment with the default content fixtures.
    pub fn new() -> Self {
        Self::with_store(fixtures())
    }

    pub fn with_store(store: StubContentStore) -> Self {
        Self::build(store, RecordingMailer::default())
    }

    pub fn with_failing_mailer() -> Self {
        Self::build(
            fixtures(),
            RecordingMailer {
                fail: true,
                ..Default::default()
            },
        )
    }

    fn build(store: StubContentStore, mailer: RecordingMailer) -> Self {
        let mailer = Arc::new(mailer);
        let state = AppState {
            content: Arc::new(store),
            comments: Arc::new(InMemoryCommentStore::new()),
            mailer: mailer.clone(),
        };

        Self {
            router: router(state),
            mailer,
        }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.router.clone())
    }

    /// Build a `TestServer` that does NOT expect success by default (for
    /// error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .build(self.router.clone())
    }
}

fn paragraph(text: &str) -> ContentBlock {
    ContentBlock::Paragraph {
        paragraph: RichTextPayload::from_plain(text),
    }
}

fn post(id: &str, title: &str, excerpt: &str, tags: &[&str], date: &str) -> BlogPostSummary {
    BlogPostSummary {
        id: id.to_string(),
        slug: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date: date.to_string(),
        read_time: "4 min".to_string(),
    }
}

/// Default content fixtures shared by the suites. Ids are referenced as
/// literals in the tests.
pub fn fixtures() -> StubContentStore {
    let english = vec![
        post(
            "p-nextjs",
            "Next.js vs React: When to Choose Which",
            "Picking a frontend stack without regrets",
            &["react", "frontend"],
            "2024-03-10T09:00:00Z",
        ),
        post(
            "p-rust",
            "Learning Rust in Public",
            "Notes from my first year of Rust",
            &["rust", "learning"],
            "2024-06-01T09:00:00Z",
        ),
    ];
    let chinese = vec![post(
        "p-rust-zh",
        "用 Rust 构建网站",
        "一年 Rust 学习笔记",
        &["rust"],
        "2024-05-20T09:00:00Z",
    )];

    let projects = vec![ProjectSummary {
        id: "pr-folio".to_string(),
        slug: "pr-folio".to_string(),
        title: "Portfolio Website".to_string(),
        description: "This very site".to_string(),
        technologies: vec!["next.js".to_string(), "typescript".to_string()],
        date: Some("2023-11-02T00:00:00Z".to_string()),
        created_time: None,
    }];

    let mut contents = HashMap::new();
    contents.insert(
        "p-nextjs".to_string(),
        PostContent {
            content: vec![
                paragraph("Next.js bundles routing and rendering choices."),
                paragraph("React alone leaves those choices to you."),
            ],
        },
    );
    contents.insert(
        "p-rust".to_string(),
        PostContent {
            content: vec![paragraph("Rust rewards patience.")],
        },
    );

    StubContentStore {
        posts_by_language: HashMap::from([
            ("English".to_string(), english),
            ("Chinese".to_string(), chinese),
        ]),
        projects,
        contents,
        fail_posts: false,
        fail_projects: false,
    }
}
