use crate::errors::AppError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(error = %self, "request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let message = match &self {
            AppError::EmptyRoster => "roster empty".to_string(),
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
