use axum::{extract::rejection::JsonRejection, Json};

use crate::server::error::AppError;

/// Unwraps a JSON request body, treating a `null` body as missing.
///
/// Handlers extract `Result<Json<Option<T>>, JsonRejection>` so that both a malformed body
/// and an explicit `null` end up as 400 Bad Request instead of axum's default rejections.
///
/// # Arguments
/// - `payload` - The extracted body or the rejection produced while extracting it
///
/// # Returns
/// - `Ok(T)` - The deserialized body
/// - `Err(AppError::BadRequest)` - The body was `null`, not JSON, or did not match `T`
pub fn require_body<T>(payload: Result<Json<Option<T>>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(Some(body))) => Ok(body),
        Ok(Json(None)) => Err(AppError::BadRequest("Request body is required".to_string())),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}
