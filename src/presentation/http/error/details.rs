// src/presentation/http/error/details.rs
use serde::Serialize;

/// Structured context attached to an [`AppError`](super::AppError).
///
/// The set of shapes is closed; each serializes as a flat JSON object under
/// the `details` key of the error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    Entity {
        entity: String,
        id: String,
    },
    Field {
        field: String,
        reason: String,
    },
    Route {
        #[serde(skip_serializing_if = "Option::is_none")]
        method: Option<String>,
        path: String,
        reason: String,
    },
    Violations {
        errors: Vec<FieldViolation>,
    },
    Panic {
        panic_value: String,
    },
    Reason {
        reason: String,
    },
}

/// One failed rule on one field of a request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
    pub rule: String,
    pub value: String,
}

impl ErrorDetails {
    /// The `reason` string carried by shapes that have one.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Field { reason, .. } | Self::Route { reason, .. } | Self::Reason { reason } => {
                Some(reason)
            }
            Self::Entity { .. } | Self::Violations { .. } | Self::Panic { .. } => None,
        }
    }
}
