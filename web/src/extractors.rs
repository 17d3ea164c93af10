//! Custom Axum extractors.
//!
//! [`AppJson`] wraps `axum::Json` so body rejections render the uniform
//! error envelope instead of Axum's plain-text default.

use crate::error::AppError;
use axum::extract::FromRequest;
use axum::Json;

/// JSON body extractor whose rejection is an [`AppError`] envelope.
///
/// # Examples
///
/// ```ignore
/// async fn create_area(
///     State(state): State<AppState>,
///     AppJson(request): AppJson<CreateAreaRequest>,
/// ) -> Result<impl IntoResponse, AppError> { ... }
/// ```
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
