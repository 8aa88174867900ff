//! API Error Responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error that renders as an HTTP response
#[derive(Debug)]
pub enum ApiError {
    /// Request failed profile validation (422)
    Validation(Vec<String>),
    /// Unexpected failure in the prediction path (500)
    Internal(String),
}

/// JSON body for error responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: "profile validation failed".to_string(),
                    details,
                },
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: message,
                    details: Vec::new(),
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_422() {
        let response = ApiError::Validation(vec!["age out of range".to_string()]).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
