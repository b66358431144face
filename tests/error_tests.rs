use axum::{http::StatusCode, response::IntoResponse};
use causehub::error::AppError;
use http_body_util::BodyExt;
use serde_json::Value;

// Test for AppError Display implementation
#[test]
fn test_app_error_display() {
    let error = AppError::InvalidRequest("Invalid email format.".to_string());
    assert_eq!(error.to_string(), "Invalid email format.");

    let error = AppError::NotFound("Cause not found".to_string());
    assert_eq!(error.to_string(), "Cause not found");

    let error = AppError::DatabaseError("Failed to fetch causes".to_string());
    assert_eq!(error.to_string(), "Failed to fetch causes");
}

// Test for AppError IntoResponse implementation
#[tokio::test]
async fn test_app_error_into_response() {
    let error = AppError::InvalidRequest("Invalid email format.".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["error"], "Invalid email format.");

    let error = AppError::NotFound("Cause with ID 999 not found.".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["error"], "Cause with ID 999 not found.");

    let error = AppError::DatabaseError("Failed to submit donation".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["error"], "Failed to submit donation");
}
