use axum::{extract::State, http::StatusCode, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::store;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    /// Cause to credit. Omit, null or "" for a general-fund donation.
    /// Accepted as a number or a numeric string, as sent by the form.
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub cause_id: Option<JsonValue>,
    /// Donor's name
    #[serde(default)]
    pub donor_name: Option<String>,
    /// Donor's email address
    #[serde(default)]
    pub donor_email: Option<String>,
    /// Donation amount; must be positive. Number or numeric string.
    #[serde(default)]
    #[schema(value_type = f64)]
    pub amount: Option<JsonValue>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationResponse {
    pub message: String,
    /// Generated identifier of the recorded donation
    pub donation_id: i32,
}

/// None when the field was omitted or sent empty; an error for anything that
/// is present but not a positive integer.
fn parse_cause_id(raw: Option<&JsonValue>) -> Result<Option<i32>, AppError> {
    let raw = match raw {
        None | Some(JsonValue::Null) => return Ok(None),
        Some(JsonValue::String(s)) if s.is_empty() => return Ok(None),
        Some(raw) => raw,
    };

    let parsed = match raw {
        JsonValue::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        JsonValue::String(s) => s.parse::<i32>().ok(),
        _ => None,
    };

    match parsed {
        Some(id) if id > 0 => Ok(Some(id)),
        _ => Err(AppError::InvalidRequest(
            "Invalid causeId. Must be a positive number if provided.".to_string(),
        )),
    }
}

fn parse_amount(raw: Option<&JsonValue>) -> Result<f64, AppError> {
    let missing =
        || AppError::InvalidRequest("Invalid donation data. Required field: amount.".to_string());

    let raw = match raw {
        None | Some(JsonValue::Null) => return Err(missing()),
        Some(JsonValue::String(s)) if s.is_empty() => return Err(missing()),
        Some(raw) => raw,
    };

    let value = match raw {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.parse::<f64>().ok(),
        _ => None,
    };

    match value {
        Some(amount) if amount > 0.0 => Ok(amount),
        _ => Err(AppError::InvalidRequest(
            "Donation amount must be a positive number.".to_string(),
        )),
    }
}

/// Submit a donation
#[utoipa::path(
    post,
    path = "/api/donations",
    request_body = DonationRequest,
    responses(
        (status = 201, description = "Donation recorded", body = DonationResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Referenced cause does not exist"),
        (status = 500, description = "Store or transaction error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn submit_donation(
    State(db): State<DatabaseConnection>,
    Json(req): Json<DonationRequest>,
) -> Result<(StatusCode, Json<DonationResponse>), AppError> {
    let donor_name = req
        .donor_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            AppError::InvalidRequest(
                "Invalid donation data. Required fields: donorName, donorEmail.".to_string(),
            )
        })?;
    let donor_email = req
        .donor_email
        .as_deref()
        .filter(|email| !email.is_empty())
        .ok_or_else(|| {
            AppError::InvalidRequest(
                "Invalid donation data. Required fields: donorName, donorEmail.".to_string(),
            )
        })?;
    let amount = parse_amount(req.amount.as_ref())?;
    let cause_id = parse_cause_id(req.cause_id.as_ref())?;

    // A targeted donation must reference a cause that exists, checked before
    // the recorder runs so a bad id never opens a transaction.
    if let Some(id) = cause_id {
        let cause = store::cause_by_id(&db, id).await.map_err(|err| {
            tracing::error!(?err, cause_id = id, "error checking cause");
            AppError::DatabaseError("Failed to submit donation".to_string())
        })?;
        if cause.is_none() {
            return Err(AppError::NotFound(format!("Cause with ID {} not found.", id)));
        }
    }

    let donation_id = store::record_donation(&db, cause_id, donor_name, donor_email, amount)
        .await
        .map_err(|err| {
            tracing::error!(?err, "error submitting donation");
            AppError::DatabaseError("Failed to submit donation".to_string())
        })?;

    Ok((
        StatusCode::CREATED,
        Json(DonationResponse {
            message: "Donation successful".to_string(),
            donation_id,
        }),
    ))
}
