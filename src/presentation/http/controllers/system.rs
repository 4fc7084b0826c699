// src/presentation/http/controllers/system.rs
use crate::presentation::http::{boundary::HandlerResult, state::HttpState};
use axum::{
    Json,
    extract::Request,
    response::IntoResponse,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health(_state: HttpState, _request: Request) -> HandlerResult {
    Ok(Json(StatusResponse {
        status: "ok".into(),
    })
    .into_response())
}
