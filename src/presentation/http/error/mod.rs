// src/presentation/http/error/mod.rs
mod constructors;
mod details;

pub use details::{ErrorDetails, FieldViolation};

use crate::application::error::ApplicationError;
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::{error::Error as StdError, fmt};
use thiserror::Error;

pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Failure category. Each kind owns exactly one HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    Unauthorized,
    Forbidden,
    Conflict,
    Internal,
    Unexpected,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::NotFound,
        ErrorKind::BadRequest,
        ErrorKind::Unauthorized,
        ErrorKind::Forbidden,
        ErrorKind::Conflict,
        ErrorKind::Internal,
        ErrorKind::Unexpected,
    ];

    pub const fn status(self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Internal | ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::Forbidden => "FORBIDDEN",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::Internal => "INTERNAL",
            ErrorKind::Unexpected => "UNEXPECTED",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable machine-readable identifiers. Clients branch on these, so existing
/// values must never be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    EntityNotFound,
    ValidationError,
    MultipleValidationErrors,
    InvalidJson,
    ConflictError,
    InternalServerError,
    UnexpectedError,
    MethodNotAllowed,
    RouteNotFound,
    Unauthorized,
    Forbidden,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::EntityNotFound => "ENTITY_NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::MultipleValidationErrors => "MULTIPLE_VALIDATION_ERRORS",
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::ConflictError => "CONFLICT_ERROR",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
            ErrorCode::UnexpectedError => "UNEXPECTED_ERROR",
            ErrorCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ErrorCode::RouteNotFound => "ROUTE_NOT_FOUND",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The one error value that reaches the wire.
///
/// Instances come only from the constructors in this module. `cause` is kept
/// for logging and is never serialized.
#[derive(Debug, Error, Serialize)]
#[error("[{kind}] {message}: {code}")]
pub struct AppError {
    #[serde(rename = "type")]
    kind: ErrorKind,
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<ErrorDetails>,
    #[serde(skip)]
    #[source]
    cause: Option<BoxError>,
}

impl AppError {
    fn new(kind: ErrorKind, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
            details: None,
            cause: None,
        }
    }

    fn with_details(mut self, details: ErrorDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&ErrorDetails> {
        self.details.as_ref()
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    fn log(&self) {
        let status = self.status();
        let cause = self.cause.as_ref().map(|c| c.to_string());
        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                code = %self.code,
                message = %self.message,
                cause = cause.as_deref(),
                "request failed"
            );
        } else {
            tracing::warn!(
                status = status.as_u16(),
                code = %self.code,
                message = %self.message,
                "request rejected"
            );
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        (self.status(), Json(self)).into_response()
    }
}

impl From<ApplicationError> for AppError {
    fn from(err: ApplicationError) -> Self {
        let app_error = match &err {
            ApplicationError::Domain(DomainError::Validation(reason)) => {
                AppError::validation("request", reason.as_str())
            }
            ApplicationError::Domain(DomainError::Conflict { field, reason })
            | ApplicationError::Conflict { field, reason } => {
                AppError::conflict(field.as_str(), reason.as_str())
            }
            ApplicationError::Domain(DomainError::Persistence(reason))
            | ApplicationError::Infrastructure(reason) => AppError::internal(reason.as_str()),
            ApplicationError::Validation { field, reason } => {
                AppError::validation(field.as_str(), reason.as_str())
            }
            ApplicationError::NotFound { entity, id } => {
                AppError::entity_not_found(entity.as_str(), id)
            }
            ApplicationError::Unauthorized(reason) => AppError::unauthorized(reason.as_str()),
            ApplicationError::Forbidden(reason) => AppError::forbidden(reason.as_str()),
        };
        app_error.with_cause(err)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        ApplicationError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body;
    use serde_json::{Value, json};

    #[test]
    fn every_kind_has_its_fixed_status() {
        let expected = [
            (ErrorKind::NotFound, 404),
            (ErrorKind::BadRequest, 400),
            (ErrorKind::Unauthorized, 401),
            (ErrorKind::Forbidden, 403),
            (ErrorKind::Conflict, 409),
            (ErrorKind::Internal, 500),
            (ErrorKind::Unexpected, 500),
        ];
        assert_eq!(expected.len(), ErrorKind::ALL.len());
        for (kind, status) in expected {
            assert_eq!(kind.status().as_u16(), status, "{kind}");
        }
    }

    #[test]
    fn kind_and_code_serialize_as_screaming_snake_case() {
        for kind in ErrorKind::ALL {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
        }
        assert_eq!(
            serde_json::to_value(ErrorCode::MultipleValidationErrors).unwrap(),
            json!("MULTIPLE_VALIDATION_ERRORS")
        );
        assert_eq!(
            serde_json::to_value(ErrorCode::InvalidJson).unwrap(),
            json!("INVALID_JSON")
        );
    }

    #[test]
    fn display_matches_kind_message_code() {
        let err = AppError::conflict("email", "user already exists");
        assert_eq!(err.to_string(), "[CONFLICT] Resource conflict: CONFLICT_ERROR");
    }

    #[test]
    fn cause_is_exposed_as_source_but_not_serialized() {
        let io = std::io::Error::other("disk on fire");
        let err = AppError::internal("storage failed").with_cause(io);

        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("disk on fire"));
        let body = serde_json::to_value(&err).unwrap();
        assert!(body.get("cause").is_none());
        assert!(!body.to_string().contains("disk on fire"));
    }

    #[tokio::test]
    async fn response_carries_status_and_wire_shape() {
        let resp = AppError::route_not_found("/api/auth/unknown").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "NOT_FOUND",
                "code": "ROUTE_NOT_FOUND",
                "message": "Route not found",
                "details": {
                    "path": "/api/auth/unknown",
                    "reason": "Route /api/auth/unknown not found",
                },
            })
        );
    }

    #[test]
    fn application_errors_map_onto_constructors() {
        let cases: Vec<(ApplicationError, ErrorCode, StatusCode)> = vec![
            (
                ApplicationError::conflict("email", "user already exists"),
                ErrorCode::ConflictError,
                StatusCode::CONFLICT,
            ),
            (
                ApplicationError::Domain(DomainError::conflict("email", "taken")),
                ErrorCode::ConflictError,
                StatusCode::CONFLICT,
            ),
            (
                ApplicationError::not_found("user", "a@b.c"),
                ErrorCode::EntityNotFound,
                StatusCode::NOT_FOUND,
            ),
            (
                ApplicationError::validation("phone", "bad"),
                ErrorCode::ValidationError,
                StatusCode::BAD_REQUEST,
            ),
            (
                ApplicationError::unauthorized("invalid credentials"),
                ErrorCode::Unauthorized,
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApplicationError::forbidden("nope"),
                ErrorCode::Forbidden,
                StatusCode::FORBIDDEN,
            ),
            (
                ApplicationError::infrastructure("pool closed"),
                ErrorCode::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApplicationError::Domain(DomainError::Persistence("connection reset".into())),
                ErrorCode::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (source, code, status) in cases {
            let err = AppError::from(source);
            assert_eq!(err.code(), code);
            assert_eq!(err.status(), status);
            assert!(err.source().is_some());
        }
    }

    #[test]
    fn persistence_failure_keeps_text_in_reason_only() {
        let err = AppError::from(DomainError::Persistence("connection reset".into()));
        assert_eq!(err.code(), ErrorCode::InternalServerError);
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.details().and_then(ErrorDetails::reason), Some("connection reset"));
    }
}
