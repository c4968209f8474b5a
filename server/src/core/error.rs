use crate::repositories::RepositoryError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    // Common error constructors
    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        let details = err.to_string();
        match err {
            RepositoryError::Validation(_) => Self::bad_request("Validation error"),
            RepositoryError::DuplicateId(_) => Self::bad_request("Duplicate id"),
            RepositoryError::NotFound(_) => Self::not_found("Resource not found"),
        }
        .with_details(details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        Self::bad_request("Invalid payload").with_details(err.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(err: PathRejection) -> Self {
        Self::bad_request("Invalid path").with_details(err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            error: self.message,
            details: self.details,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ValidationError;

    #[test]
    fn test_repository_error_mapping() {
        let err = AppError::from(RepositoryError::Validation(ValidationError::MissingBrand));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.details(), Some("brand required"));

        let err = AppError::from(RepositoryError::DuplicateId(3));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.details(), Some("a woodpellet with id 3 already exists"));

        let err = AppError::from(RepositoryError::NotFound(9));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.details(), Some("woodpellet with id 9 not found"));
    }

    #[test]
    fn test_response_status() {
        let response = AppError::not_found("Resource not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
