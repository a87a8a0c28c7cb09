use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared_types::{ErrorResponse, ValidationIssue};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("Validation failed: {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{entity} not found"))
    }

    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::Validation(vec![ValidationIssue::new(field, message)])
    }
}

/// Turns collected issues into an error, or `Ok` when there are none.
pub fn ensure_valid(issues: Vec<ValidationIssue>) -> ApiResult<()> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(issues))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::NotFound(message) => ErrorResponse {
                message: message.clone(),
                errors: Vec::new(),
            },
            ApiError::Validation(issues) => ErrorResponse {
                message: "Validation failed".to_string(),
                errors: issues.clone(),
            },
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse {
                    message: "Internal server error".to_string(),
                    errors: Vec::new(),
                }
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<JsonPayloadError> for ApiError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::Deserialize(e) => ApiError::invalid("body", e.to_string()),
            JsonPayloadError::ContentType => {
                ApiError::invalid("body", "Expected a JSON body (Content-Type: application/json)")
            }
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                ApiError::invalid("body", "Request body is too large")
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<QueryPayloadError> for ApiError {
    fn from(err: QueryPayloadError) -> Self {
        ApiError::invalid("query", err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::not_found("Contact").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::invalid("email", "Invalid email address").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_ensure_valid() {
        assert!(ensure_valid(Vec::new()).is_ok());

        match ensure_valid(vec![ValidationIssue::new("name", "Name is required")]) {
            Err(ApiError::Validation(issues)) => assert_eq!(issues[0].field, "name"),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::not_found("Contact").to_string(), "Contact not found");
    }
}
