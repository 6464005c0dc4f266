use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbError(DbErr),

    /// Unique or foreign-key constraint rejected by the store.
    #[error("Integrity error: {0}")]
    Integrity(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

impl AppError {
    pub fn not_found(what: &str) -> Self {
        AppError::NotFound(format!("{} not found", what))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::DbError(_) | AppError::InternalServerError(_) => "internal",
            AppError::Integrity(_) => "integrity",
            AppError::NotFound(_) => "not_found",
            AppError::Validation(_) => "validation",
            AppError::Conflict(_) => "conflict",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::Forbidden(_) => "forbidden",
            AppError::UnsupportedMediaType(_) => "unsupported_media_type",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DbError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Integrity(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg))
            | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => AppError::Integrity(msg),
            _ => AppError::DbError(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();
        let message = match self {
            AppError::DbError(err) => {
                tracing::error!("Database error: {:?}", err);
                "Something went wrong".to_string()
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                "Something went wrong".to_string()
            }
            AppError::Integrity(msg)
            | AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::Conflict(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::UnsupportedMediaType(msg) => msg,
        };

        (
            status,
            Json(json!({
                "error": message,
                "error_code": status.as_u16(),
                "kind": kind,
            })),
        )
            .into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Validation("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Integrity("dup".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("Order").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Forbidden("no".into()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::UnsupportedMediaType("no".into()).status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            AppError::InternalServerError("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_plain_db_error_is_internal() {
        let err = AppError::from(DbErr::Custom("connection reset".into()));
        assert_eq!(err.kind(), "internal");
    }

    #[test]
    fn test_not_found_message() {
        match AppError::not_found("Product") {
            AppError::NotFound(msg) => assert_eq!(msg, "Product not found"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
