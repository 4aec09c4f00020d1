//! Per-request error type for the todo API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors a handler can return. Each maps to one HTTP status and a
/// `{"error": ...}` body; none of them affect the store.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The referenced todo does not exist.
    #[error("Todo not found")]
    TodoNotFound,

    /// No route matches the request path.
    #[error("Not found")]
    RouteNotFound,
}

impl ApiError {
    pub fn missing_task() -> Self {
        ApiError::Validation("Please provide a 'task' field".to_string())
    }

    pub fn invalid_json() -> Self {
        ApiError::Validation("Invalid JSON format".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::TodoNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "request rejected");
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_error_kinds() {
        assert_eq!(ApiError::missing_task().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::TodoNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(ApiError::TodoNotFound.to_string(), "Todo not found");
        assert_eq!(ApiError::invalid_json().to_string(), "Invalid JSON format");
    }
}
