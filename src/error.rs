//! HTTP-facing error type.
//!
//! Domain failures are collapsed into a handful of generic messages; the
//! detail stays in the logs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::error::ShareError;

pub const MISSING_CODE_MESSAGE: &str = "Missing 'code' parameter";
pub const INVALID_CODE_MESSAGE: &str = "Invalid code parameter";
pub const CODE_TOO_LARGE_MESSAGE: &str = "Code parameter too large";
pub const SHARE_FAILED_MESSAGE: &str = "Failed to share code with playground";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    PayloadTooLarge { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::PayloadTooLarge {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ShareError> for AppError {
    fn from(e: ShareError) -> Self {
        match e {
            ShareError::MissingParameter => AppError::bad_request(MISSING_CODE_MESSAGE),
            ShareError::InvalidParameter(_) => AppError::bad_request(INVALID_CODE_MESSAGE),
            ShareError::PayloadTooLarge { .. } => {
                AppError::payload_too_large(CODE_TOO_LARGE_MESSAGE)
            }
            ShareError::UpstreamUnreachable(_)
            | ShareError::UpstreamRejected { .. }
            | ShareError::UpstreamReadError(_)
            | ShareError::UpstreamEmptyResult => AppError::internal(SHARE_FAILED_MESSAGE),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation { message }
            | AppError::PayloadTooLarge { message }
            | AppError::Internal { message } => message,
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
