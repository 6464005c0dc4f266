use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::shared::error::AppError;

/// `{"msg": ...}` body used by create/delete endpoints.
pub fn message(msg: impl Into<String>) -> Json<Value> {
    Json(json!({ "msg": msg.into() }))
}

/// Fallback for unmatched routes.
pub async fn handler_404() -> Response {
    AppError::not_found("Route").into_response()
}

/// Handler for 500 Internal Server Error (used by CatchPanicLayer)
pub fn handler_500(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::InternalServerError(format!("handler panicked: {}", detail)).into_response()
}
