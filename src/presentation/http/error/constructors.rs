// src/presentation/http/error/constructors.rs
use super::{AppError, BoxError, ErrorCode, ErrorDetails, ErrorKind, FieldViolation};
use std::fmt::Display;

impl AppError {
    pub fn entity_not_found(entity: impl Into<String>, id: impl Display) -> Self {
        let entity = entity.into();
        Self::new(
            ErrorKind::NotFound,
            ErrorCode::EntityNotFound,
            format!("{entity} not found"),
        )
        .with_details(ErrorDetails::Entity {
            entity,
            id: id.to_string(),
        })
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::BadRequest,
            ErrorCode::ValidationError,
            "Validation failed",
        )
        .with_details(ErrorDetails::Field {
            field: field.into(),
            reason: reason.into(),
        })
    }

    pub fn multiple_validation(violations: Vec<FieldViolation>) -> Self {
        Self::new(
            ErrorKind::BadRequest,
            ErrorCode::MultipleValidationErrors,
            "Multiple validation errors occurred",
        )
        .with_details(ErrorDetails::Violations { errors: violations })
    }

    /// The decoder's message stays in `cause`; clients only see a fixed reason.
    pub fn invalid_json(cause: impl Into<BoxError>) -> Self {
        Self::new(ErrorKind::BadRequest, ErrorCode::InvalidJson, "Invalid JSON format")
            .with_details(ErrorDetails::Reason {
                reason: "The request body contains invalid JSON".into(),
            })
            .with_cause(cause)
    }

    pub fn conflict(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, ErrorCode::ConflictError, "Resource conflict")
            .with_details(ErrorDetails::Field {
                field: field.into(),
                reason: reason.into(),
            })
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Internal,
            ErrorCode::InternalServerError,
            "Internal Server Error",
        )
        .with_details(ErrorDetails::Reason {
            reason: reason.into(),
        })
    }

    /// A panic whose payload was not an error value.
    pub fn unexpected(panic_value: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Unexpected,
            ErrorCode::UnexpectedError,
            "An unexpected error occurred",
        )
        .with_details(ErrorDetails::Panic {
            panic_value: panic_value.into(),
        })
    }

    pub fn method_not_allowed(method: impl Display, path: impl Into<String>) -> Self {
        let path = path.into();
        let method = method.to_string();
        let reason = format!("Method {method} is not allowed for path {path}");
        Self::new(
            ErrorKind::BadRequest,
            ErrorCode::MethodNotAllowed,
            "Method not allowed",
        )
        .with_details(ErrorDetails::Route {
            method: Some(method),
            path,
            reason,
        })
    }

    pub fn route_not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        let reason = format!("Route {path} not found");
        Self::new(ErrorKind::NotFound, ErrorCode::RouteNotFound, "Route not found").with_details(
            ErrorDetails::Route {
                method: None,
                path,
                reason,
            },
        )
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Unauthorized,
            ErrorCode::Unauthorized,
            "Authentication failed",
        )
        .with_details(ErrorDetails::Reason {
            reason: reason.into(),
        })
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, ErrorCode::Forbidden, "Access denied").with_details(
            ErrorDetails::Reason {
                reason: reason.into(),
            },
        )
    }
}
