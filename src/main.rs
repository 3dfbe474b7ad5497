use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use folio::app::AppState;
use folio::config::AppConfig;
use folio::content::client::HttpContentStore;
use folio::db::comments::InMemoryCommentStore;
use folio::mail::client::HttpMailer;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting folio server...");

    let config = AppConfig::load().expect("Failed to load configuration");

    let content = Arc::new(
        HttpContentStore::new(&config.content).expect("Failed to initialize content store client"),
    );
    tracing::info!("Content store client ready at {}", config.content.base_url);

    let mailer =
        Arc::new(HttpMailer::new(&config.mail).expect("Failed to initialize mail client"));
    let comments = Arc::new(InMemoryCommentStore::new());

    let state = AppState {
        content,
        comments,
        mailer,
    };

    let app = folio::app::router(state)
        .fallback_service(ServeDir::new(&config.assets_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
