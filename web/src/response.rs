//! The uniform response envelope.
//!
//! Every API response is `{success, data?, error?, count?}`; absent fields
//! are omitted rather than serialized as null. Error envelopes are built by
//! [`crate::error::AppError`].

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Uniform wrapper around every API payload.
#[derive(Clone, Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable error message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Number of records in `data`, present on list responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A `200 OK` success envelope.
    #[must_use]
    pub const fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
            count: None,
        })
    }

    /// A `200 OK` success envelope carrying a list count.
    #[must_use]
    pub const fn with_count(data: T, count: usize) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
            count: Some(count),
        })
    }

    /// A `201 Created` success envelope.
    #[must_use]
    pub const fn created(data: T) -> (StatusCode, Json<Self>) {
        (
            StatusCode::CREATED,
            Json(Self {
                success: true,
                data: Some(data),
                error: None,
                count: None,
            }),
        )
    }
}
