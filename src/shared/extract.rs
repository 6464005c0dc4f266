use axum::extract::{FromRequest, FromRequestParts};

use crate::shared::error::AppError;

/// `Json` whose rejections surface as validation errors instead of axum's
/// plain-text 415/422 responses.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Query` with the same JSON error body on a malformed query string.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
