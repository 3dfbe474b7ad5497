use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::error::AppError;
use crate::mail::client::ContactMessage;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: String,
}

/// Axum handler for `POST /api/contact`.
pub async fn contact_handler(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let message = validate_contact(request)?;
    state.mailer.send(&message).await?;

    Ok(Json(ContactResponse {
        message: "Message sent".to_string(),
    }))
}

fn validate_contact(request: ContactRequest) -> Result<ContactMessage, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name cannot be empty".to_string()));
    }
    if request.message.trim().is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }
    // Light-touch check; the email service does the real validation.
    if request.email.trim().is_empty() || !request.email.contains('@') {
        return Err(AppError::BadRequest(format!(
            "Invalid email address '{}'",
            request.email
        )));
    }

    Ok(ContactMessage {
        name: request.name,
        email: request.email,
        message: request.message,
    })
}
