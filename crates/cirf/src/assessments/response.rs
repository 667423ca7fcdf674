//! JSON envelopes shared by every assessment endpoint.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

use super::repository::RepositoryError;
use super::service::AssessmentServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    BadRequest,
    ValidationError,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    RateLimited,
    InsufficientCredits,
    InternalError,
    DatabaseError,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::BadRequest | ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ErrorCode::InsufficientCredits => StatusCode::PAYMENT_REQUIRED,
            ErrorCode::InternalError | ErrorCode::DatabaseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Failure body: `{ success: false, error: { code, message, details? } }`.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<Value>,
    retry_after_secs: Option<u64>,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            retry_after_secs: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::Unauthorized, "Authentication required")
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn rate_limited(retry_after_secs: u64) -> Self {
        Self {
            code: ErrorCode::RateLimited,
            message: "Too many requests. Please try again later.".to_string(),
            details: Some(json!({ "retryAfter": retry_after_secs })),
            retry_after_secs: Some(retry_after_secs),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut error = json!({
            "code": self.code,
            "message": self.message,
        });
        if let Some(details) = self.details {
            error["details"] = details;
        }

        let body = Json(json!({ "success": false, "error": error }));
        let mut response = (self.code.status(), body).into_response();
        if let Some(secs) = self.retry_after_secs {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }
        response
    }
}

impl From<AssessmentServiceError> for ApiError {
    fn from(value: AssessmentServiceError) -> Self {
        match value {
            AssessmentServiceError::RateLimited { retry_after_secs } => {
                ApiError::rate_limited(retry_after_secs)
            }
            AssessmentServiceError::Locked {
                assessment_type,
                requires,
            } => ApiError::new(
                ErrorCode::Forbidden,
                super::unlock::requirement_message(assessment_type),
            )
            .with_details(json!({
                "assessmentType": assessment_type,
                "requires": requires,
            })),
            AssessmentServiceError::Validation(invalid) => {
                ApiError::new(ErrorCode::ValidationError, "Invalid assessment data")
                    .with_details(json!(invalid.0))
            }
            AssessmentServiceError::Repository(RepositoryError::InsufficientCredits {
                balance,
                required,
            }) => ApiError::new(
                ErrorCode::InsufficientCredits,
                "Insufficient credits. Please purchase more credits to take this assessment.",
            )
            .with_details(json!({ "balance": balance, "required": required })),
            AssessmentServiceError::Repository(RepositoryError::NotFound) => {
                ApiError::not_found("Assessment not found")
            }
            AssessmentServiceError::Repository(RepositoryError::Conflict) => {
                ApiError::new(ErrorCode::Conflict, "Assessment already exists")
            }
            AssessmentServiceError::Repository(RepositoryError::Unavailable(reason)) => {
                error!(%reason, "assessment repository unavailable");
                ApiError::new(ErrorCode::DatabaseError, "Failed to access assessment data")
            }
        }
    }
}

/// Success body: `{ success: true, data, message? }`.
pub fn success<T: Serialize>(status: StatusCode, data: T, message: Option<&str>) -> Response {
    let mut body = json!({ "success": true, "data": data });
    if let Some(message) = message {
        body["message"] = Value::from(message);
    }
    (status, Json(body)).into_response()
}
