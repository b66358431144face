use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::DatabaseConnection;

use crate::entities::cause;
use crate::error::AppError;
use crate::store;

/// List all causes
#[utoipa::path(
    get,
    path = "/api/causes",
    responses(
        (status = 200, description = "All causes", body = Vec<cause::Model>),
        (status = 500, description = "Store error")
    )
)]
pub async fn list_causes(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<cause::Model>>, AppError> {
    let causes = store::all_causes(&db).await.map_err(|err| {
        tracing::error!(?err, "error fetching causes");
        AppError::DatabaseError("Failed to fetch causes".to_string())
    })?;
    Ok(Json(causes))
}

/// Get a single cause by ID
#[utoipa::path(
    get,
    path = "/api/causes/{id}",
    params(("id" = String, Path, description = "Cause identifier, a positive integer")),
    responses(
        (status = 200, description = "The requested cause", body = cause::Model),
        (status = 400, description = "Invalid id format"),
        (status = 404, description = "Cause not found"),
        (status = 500, description = "Store error")
    )
)]
#[tracing::instrument(skip(db))]
pub async fn get_cause(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> Result<Json<cause::Model>, AppError> {
    // The id arrives as a raw path segment so a non-numeric value can be
    // reported as 400 rather than a router-level rejection.
    let id: i32 = id
        .parse()
        .ok()
        .filter(|parsed| *parsed > 0)
        .ok_or_else(|| {
            AppError::InvalidRequest(
                "Invalid cause ID format. ID must be a positive number.".to_string(),
            )
        })?;

    let cause = store::cause_by_id(&db, id).await.map_err(|err| {
        tracing::error!(?err, cause_id = id, "error fetching cause");
        AppError::DatabaseError("Failed to fetch cause".to_string())
    })?;

    match cause {
        Some(cause) => Ok(Json(cause)),
        None => Err(AppError::NotFound("Cause not found".to_string())),
    }
}
