// src/presentation/http/extractors.rs
use crate::presentation::http::{
    error::AppError,
    validation::{Validate, decode_and_validate},
};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body that has been decoded and has passed its [`Validate`] schema.
///
/// Any failure to read the body (including exceeding the configured body
/// limit) is reported as `INVALID_JSON`, the same as a decode failure.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Validate + DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid_json(rejection.body_text()))?;

        decode_and_validate(&body).map(Self)
    }
}
