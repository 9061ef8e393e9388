//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use studio_promptgen::PromptError;
use studio_store::StoreError;
use studio_videogen::VideoGenError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Non-success response from an external service, passed through with
    /// its original status code and body.
    #[error("{message}")]
    Upstream {
        status: u16,
        message: String,
        detail: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(what) => ApiError::NotFound(what),
        }
    }
}

impl From<VideoGenError> for ApiError {
    fn from(e: VideoGenError) -> Self {
        match e {
            VideoGenError::Validation(msg) => ApiError::BadRequest(msg),
            VideoGenError::Provider { status, body } => ApiError::Upstream {
                status,
                message: "Video provider call failed".to_string(),
                detail: body,
            },
            VideoGenError::Store(e) => e.into(),
            VideoGenError::Network(e) => ApiError::Internal(e.to_string()),
            VideoGenError::InvalidResponse(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<PromptError> for ApiError {
    fn from(e: PromptError) -> Self {
        match e {
            PromptError::Upstream { status, body } => ApiError::Upstream {
                status,
                message: "Language model call failed".to_string(),
                detail: body,
            },
            PromptError::Network(e) => ApiError::Internal(e.to_string()),
            PromptError::InvalidResponse(msg) => ApiError::Internal(msg),
        }
    }
}

/// Structured failure envelope: every operation answers with a success
/// flag plus a human-readable message.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (message, detail) = match self {
            ApiError::Upstream { message, detail, .. } => (message, Some(detail)),
            ApiError::Internal(msg) => {
                // Don't expose internal error details in production
                if std::env::var("ENVIRONMENT").unwrap_or_default() == "production" {
                    ("An internal error occurred".to_string(), None)
                } else {
                    (msg, None)
                }
            }
            other => (other.to_string(), None),
        };

        let body = ErrorBody {
            success: false,
            message,
            error: detail,
        };

        (status, Json(body)).into_response()
    }
}
