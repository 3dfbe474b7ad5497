use anyhow::Context;
use serde::Deserialize;
use url::Url;

/// Server configuration, loaded from an optional `folio.toml` next to the
/// binary and overridden by `FOLIO_`-prefixed environment variables
/// (nested keys use `__`, e.g. `FOLIO_CONTENT__API_TOKEN`).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Directory served as static site assets (router fallback).
    pub assets_dir: String,
    pub content: ContentServiceConfig,
    pub mail: MailConfig,
}

/// Connection settings for the hosted content service.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentServiceConfig {
    /// Base URL of the service REST API.
    pub base_url: String,
    /// Bearer token for API access.
    pub api_token: String,
    /// Collection id holding blog posts.
    pub blog_collection: String,
    /// Collection id holding portfolio projects.
    pub project_collection: String,
}

/// Settings for the third-party email-sending API behind the contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// Endpoint messages are POSTed to.
    pub endpoint: String,
    /// API key sent in the `Authorization` header.
    pub api_key: String,
    /// Recipient address for contact-form messages.
    pub to_address: String,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .set_default("bind_addr", "127.0.0.1:4000")?
            .set_default("assets_dir", "public")?
            .set_default("content.base_url", "http://localhost:8600")?
            .set_default("content.api_token", "dev-token")?
            .set_default("content.blog_collection", "blog")?
            .set_default("content.project_collection", "projects")?
            .set_default("mail.endpoint", "http://localhost:8700/send")?
            .set_default("mail.api_key", "dev-key")?
            .set_default("mail.to_address", "site-owner@example.com")?
            .add_source(config::File::with_name("folio").required(false))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()
            .context("Failed to assemble configuration")?;

        let cfg: AppConfig = settings
            .try_deserialize()
            .context("Invalid configuration")?;

        Url::parse(&cfg.content.base_url)
            .with_context(|| format!("Invalid content base URL '{}'", cfg.content.base_url))?;

        Ok(cfg)
    }
}
