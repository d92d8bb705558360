//! Application error taxonomy and HTTP mapping.
//!
//! Every failure a request can hit is represented here and surfaced as a
//! structured `{error, message}` JSON body with a matching status code.
//! Nothing in this module is fatal to the process.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// All recoverable request-level failures.
///
/// The variant name doubles as the `error` field of the JSON body, so
/// clients can switch on it without parsing messages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted URL is not an absolute HTTP/HTTPS URL.
    #[error("{message}")]
    InvalidUrl { message: String },

    /// The submitted validity is not a positive number of minutes.
    #[error("{message}")]
    InvalidValidity { message: String },

    /// The requested shortcode is not 3-10 alphanumeric characters.
    #[error("{message}")]
    InvalidShortcodeFormat { message: String },

    /// The requested shortcode is already taken by a live link.
    #[error("{message}")]
    ShortcodeCollision { message: String },

    /// No link exists under the given shortcode.
    #[error("{message}")]
    NotFound { message: String },

    /// The link exists but has passed its expiry time.
    #[error("{message}")]
    Expired { message: String },

    /// Random code generation kept colliding until the retry cap.
    #[error("{message}")]
    AllocatorExhausted { message: String },

    /// Catch-all for unexpected faults. The full detail is logged
    /// server-side; clients only see a generic message.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            message: format!("Invalid URL: {}", reason.into()),
        }
    }

    pub fn invalid_validity(value: i64) -> Self {
        Self::InvalidValidity {
            message: format!("Validity must be a positive number of minutes, got {value}"),
        }
    }

    pub fn invalid_shortcode_format(code: &str) -> Self {
        Self::InvalidShortcodeFormat {
            message: format!("Shortcode '{code}' must be 3-10 alphanumeric characters"),
        }
    }

    pub fn shortcode_collision(code: &str) -> Self {
        Self::ShortcodeCollision {
            message: format!("Shortcode '{code}' is already in use"),
        }
    }

    pub fn not_found(code: &str) -> Self {
        Self::NotFound {
            message: format!("No short link found for '{code}'"),
        }
    }

    pub fn expired(code: &str) -> Self {
        Self::Expired {
            message: format!("Short link '{code}' has expired"),
        }
    }

    pub fn allocator_exhausted(attempts: usize) -> Self {
        Self::AllocatorExhausted {
            message: format!("Failed to allocate a unique shortcode after {attempts} attempts"),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Machine-readable error code, also used as the JSON `error` field.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "InvalidUrl",
            Self::InvalidValidity { .. } => "InvalidValidity",
            Self::InvalidShortcodeFormat { .. } => "InvalidShortcodeFormat",
            Self::ShortcodeCollision { .. } => "ShortcodeCollision",
            Self::NotFound { .. } => "NotFound",
            Self::Expired { .. } => "Expired",
            Self::AllocatorExhausted { .. } => "AllocatorExhausted",
            Self::Internal { .. } => "InternalError",
        }
    }

    /// HTTP status code for the variant.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidUrl { .. }
            | Self::InvalidValidity { .. }
            | Self::InvalidShortcodeFormat { .. } => StatusCode::BAD_REQUEST,
            Self::ShortcodeCollision { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Expired { .. } => StatusCode::GONE,
            Self::AllocatorExhausted { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.code();

        let message = match self {
            AppError::Internal { message } => {
                tracing::error!(detail = %message, "internal error");
                "An unexpected internal error occurred".to_string()
            }
            AppError::AllocatorExhausted { message } => {
                tracing::error!(detail = %message, "shortcode allocator exhausted");
                message
            }
            other => other.to_string(),
        };

        (status, Json(ErrorBody { error, message })).into_response()
    }
}
