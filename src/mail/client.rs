use async_trait::async_trait;
use serde::Serialize;

use crate::config::MailConfig;
use crate::error::AppError;

/// A contact-form submission to be forwarded by email.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Trait for the outbound email boundary, enabling mock testing.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one message. Single attempt, no retry.
    async fn send(&self, message: &ContactMessage) -> Result<(), AppError>;
}

/// Implementation backed by a third-party email-sending HTTP API.
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    to_address: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    to: &'a str,
    reply_to: &'a str,
    subject: String,
    text: &'a str,
}

impl HttpMailer {
    pub fn new(cfg: &MailConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Mail(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: cfg.endpoint.clone(),
            api_key: cfg.api_key.clone(),
            to_address: cfg.to_address.clone(),
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), AppError> {
        let payload = SendRequest {
            to: &self.to_address,
            reply_to: &message.email,
            subject: format!("Site contact from {}", message.name),
            text: &message.message,
        };

        self.client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Mail(format!("Failed to reach email service: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::Mail(format!("Email service rejected message: {e}")))?;

        Ok(())
    }
}
