//! Error types for web handlers.
//!
//! [`AppError`] bridges `tangomango_core::ServiceError` and HTTP responses,
//! implementing Axum's `IntoResponse` to render the uniform
//! `{success: false, error}` envelope. Conflicts map to 400, matching the
//! API contract (a blocked delete and a duplicate registration are both
//! client errors here, not 409s).

use axum::extract::rejection::JsonRejection;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use tangomango_core::ServiceError;

/// Application error type for web handlers.
///
/// # Examples
///
/// ```ignore
/// async fn handler(state: State<AppState>) -> Result<Json<Data>, AppError> {
///     let area = state.areas.get(&id)?;
///     Ok(Json(area))
/// }
/// ```
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Internal error (for logging, not exposed to the client)
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            source: None,
        }
    }

    /// Attach a source error for server-side logging.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a 400 Bad Request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    /// Create a 404 Not Found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message.into())
    }

    /// Create a 500 Internal Server Error with the generic client message.
    #[must_use]
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong!".to_string(),
        )
    }

    /// The HTTP status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Error envelope body: `{success: false, error}`.
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Internal causes are logged server-side only; the client sees the
        // generic message.
        if self.status.is_server_error() {
            match &self.source {
                Some(source) => tracing::error!(
                    status = %self.status,
                    error = %source,
                    "internal server error"
                ),
                None => tracing::error!(
                    status = %self.status,
                    message = %self.message,
                    "internal server error"
                ),
            }
        }

        let body = ErrorEnvelope {
            success: false,
            error: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        let status = match err {
            ServiceError::Validation(_) | ServiceError::Conflict(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        Self::new(status, err.to_string())
    }
}

/// Malformed JSON bodies become 400 envelopes instead of Axum's default
/// plain-text rejection.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal().with_source(err)
    }
}
