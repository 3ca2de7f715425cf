//! JSON error responses.
//!
//! Every failure leaves the server as
//! `{"error": {"code": "...", "message": "..."}}` with a status derived from
//! the error class.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
}

/// A request failure ready to be rendered
#[derive(Debug)]
pub struct ApiFailure {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiFailure {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn invalid_json(rejection: &JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_json", rejection.body_text())
    }

    pub fn invalid_id(rejection: &PathRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_id", rejection.body_text())
    }
}

impl From<Error> for ApiFailure {
    fn from(err: Error) -> Self {
        let (status, code) = match err.root() {
            Error::Validation(_) => (StatusCode::BAD_REQUEST, "validation_failed"),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            Error::Enrichment(_) => (StatusCode::INTERNAL_SERVER_ERROR, "enrichment_failed"),
            Error::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_failed"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        if status.is_server_error() {
            tracing::error!(code, error = %err, "Request failed");
        } else {
            tracing::debug!(code, error = %err, "Request rejected");
        }

        Self::new(status, code, err.to_string())
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}
