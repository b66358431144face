use axum::{extract::State, http::StatusCode, Json};
use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::store;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    /// Sender's name
    #[serde(default)]
    pub name: Option<String>,
    /// Sender's email address
    #[serde(default)]
    pub email: Option<String>,
    /// Optional subject line
    #[serde(default)]
    pub subject: Option<String>,
    /// Message body
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub message: String,
    /// Generated identifier of the stored message
    pub contact_id: i32,
}

/// Submit a contact message
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Message stored", body = ContactResponse),
        (status = 400, description = "Missing fields or malformed email"),
        (status = 500, description = "Store error")
    )
)]
pub async fn submit_contact(
    State(db): State<DatabaseConnection>,
    Json(req): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    let missing = || {
        AppError::InvalidRequest(
            "Invalid contact data. Required fields: name, email, message.".to_string(),
        )
    };
    let name = req.name.as_deref().filter(|s| !s.is_empty()).ok_or_else(missing)?;
    let email = req.email.as_deref().filter(|s| !s.is_empty()).ok_or_else(missing)?;
    let message = req.message.as_deref().filter(|s| !s.is_empty()).ok_or_else(missing)?;

    if !EMAIL_RE.is_match(email) {
        return Err(AppError::InvalidRequest("Invalid email format.".to_string()));
    }

    let contact_id = store::add_contact_message(&db, name, email, req.subject.as_deref(), message)
        .await
        .map_err(|err| {
            tracing::error!(?err, "error submitting contact message");
            AppError::DatabaseError("Failed to submit contact message".to_string())
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            message: "Contact message received".to_string(),
            contact_id,
        }),
    ))
}
