// src/presentation/http/controllers/auth.rs
use crate::application::{commands::users::RegisterUserCommand, dto::RegisteredUserDto};
use crate::presentation::http::{
    boundary::HandlerResult,
    error::AppError,
    extractors::ValidatedJson,
    state::HttpState,
    validation::{FieldSchema, Rule, Validate, null_as_empty},
};
use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

/// Registration payload. Missing and `null` fields decode as empty strings so
/// the `required` rule reports them instead of the decoder.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
}

impl Validate for RegisterRequest {
    const SCHEMA: &'static [FieldSchema<Self>] = &[
        FieldSchema {
            name: "first_name",
            value: |r| &r.first_name,
            rules: &[Rule::Required, Rule::Min(2), Rule::Max(100)],
        },
        FieldSchema {
            name: "last_name",
            value: |r| &r.last_name,
            rules: &[Rule::Required, Rule::Min(2), Rule::Max(100)],
        },
        FieldSchema {
            name: "password",
            value: |r| &r.password,
            rules: &[Rule::Required, Rule::Min(6), Rule::Max(100)],
        },
        FieldSchema {
            name: "email",
            value: |r| &r.email,
            rules: &[Rule::Required, Rule::Email],
        },
        FieldSchema {
            name: "phone",
            value: |r| &r.phone,
            rules: &[Rule::Required, Rule::Numeric, Rule::Len(11)],
        },
    ];
}

impl From<RegisterRequest> for RegisterUserCommand {
    fn from(payload: RegisterRequest) -> Self {
        Self {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            password: payload.password,
            phone: payload.phone,
        }
    }
}

pub async fn register(state: HttpState, request: Request) -> HandlerResult {
    tracing::info!("new request to register user");

    let ValidatedJson(payload) = ValidatedJson::<RegisterRequest>::from_request(request, &()).await?;

    let user = state
        .services
        .user_commands
        .register(payload.into())
        .await
        .map_err(AppError::from)?;

    Ok((StatusCode::CREATED, Json(RegisteredUserDto::new(user))).into_response())
}
