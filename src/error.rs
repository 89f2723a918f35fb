//! HTTP-facing error type and response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::error::ReportError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Error surfaced to HTTP clients as a structured JSON body.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Unauthorized { message: String, details: Value },
    NotFound { message: String, details: Value },
    Upstream { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message, details)
            }
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Upstream { message, details } => {
                (StatusCode::BAD_GATEWAY, "upstream_error", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ReportError> for AppError {
    fn from(e: ReportError) -> Self {
        match e {
            ReportError::InvalidCredentials(_)
            | ReportError::EmptySelection
            | ReportError::MissingField
            | ReportError::InvalidMonth
            | ReportError::InvalidYear { .. } => AppError::bad_request(e.to_string(), json!({})),

            ReportError::AccessDenied => {
                AppError::unauthorized("Invalid credentials", json!({}))
            }

            ReportError::DirectoryRejected { status, detail } => AppError::upstream(
                "Failed to retrieve teams",
                json!({ "status": status, "detail": detail }),
            ),

            ReportError::UpstreamRejected {
                period,
                status,
                detail,
            } => AppError::upstream(
                format!("Failed to fetch invoices for {period}"),
                json!({ "period": period.to_string(), "status": status, "detail": detail }),
            ),

            ReportError::Transport(cause) => AppError::upstream(
                "Unable to reach the billing service",
                json!({ "cause": cause }),
            ),

            ReportError::EmptyResult => AppError::not_found(e.to_string(), json!({})),

            ReportError::Render(detail) => AppError::internal(
                "Failed to generate the report",
                json!({ "detail": detail }),
            ),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or(Value::Null);
        AppError::bad_request("Request validation failed", details)
    }
}
