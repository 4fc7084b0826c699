// src/presentation/http/boundary.rs
//! Error boundary around request handlers.
//!
//! A handler reports failure either by returning an error or by panicking.
//! [`guard`] turns both into an [`AppError`] response, so every dispatched
//! request gets exactly one well-formed reply. Panics are caught here and
//! nowhere else.

use crate::application::error::ApplicationError;
use crate::presentation::http::error::{AppError, BoxError};
use axum::response::{IntoResponse, Response};
use futures::FutureExt;
use std::{
    any::Any,
    future::Future,
    panic::{self, AssertUnwindSafe},
};

pub type HandlerResult = anyhow::Result<Response>;

const OPAQUE_PAYLOAD: &str = "<opaque panic payload>";

/// Run `handler` and always produce a response.
///
/// The closure is invoked inside the boundary as well, so a handler that
/// panics before returning its future is covered too.
pub async fn guard<F, Fut>(handler: F) -> Response
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = HandlerResult>,
{
    let future = match panic::catch_unwind(AssertUnwindSafe(handler)) {
        Ok(future) => future,
        Err(payload) => return recover(payload).into_response(),
    };

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(Ok(response)) => response,
        Ok(Err(err)) => normalize(err).into_response(),
        Err(payload) => recover(payload).into_response(),
    }
}

/// Coerce a returned handler error into an [`AppError`].
///
/// Errors that are not already an `AppError` (or an application error with a
/// known mapping) become `INTERNAL_SERVER_ERROR` with their text as reason.
pub fn normalize(err: anyhow::Error) -> AppError {
    let err = match err.downcast::<AppError>() {
        Ok(app_error) => return app_error,
        Err(err) => err,
    };
    match err.downcast::<ApplicationError>() {
        Ok(app_error) => app_error.into(),
        Err(err) => AppError::internal(err.to_string()).with_cause(err),
    }
}

/// Classify a recovered panic payload.
pub fn recover(payload: Box<dyn Any + Send>) -> AppError {
    let app_error = classify_panic(payload);
    tracing::error!(
        code = %app_error.code(),
        reason = app_error.details().and_then(|d| d.reason()),
        "recovered panic in request handler"
    );
    app_error
}

fn classify_panic(payload: Box<dyn Any + Send>) -> AppError {
    let payload = match payload.downcast::<AppError>() {
        Ok(app_error) => return *app_error,
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<anyhow::Error>() {
        Ok(err) => return normalize(*err),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<BoxError>() {
        Ok(err) => return AppError::internal(err.to_string()).with_cause(*err),
        Err(payload) => payload,
    };

    AppError::unexpected(panic_value(payload.as_ref()))
}

/// Text for `details.panic_value`: the panic message, or the `Display` of a
/// primitive payload. Anything else gets a placeholder.
pub fn panic_value(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = panic_message(payload) {
        return message.to_owned();
    }

    macro_rules! display_primitive {
        ($($ty:ty),+ $(,)?) => {
            $(
                if let Some(value) = payload.downcast_ref::<$ty>() {
                    return value.to_string();
                }
            )+
        };
    }
    display_primitive!(
        i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    );

    OPAQUE_PAYLOAD.to_owned()
}

/// The text of a `panic!` message payload, if it has one.
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}
