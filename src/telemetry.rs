// src/telemetry.rs
use crate::presentation::http::boundary::panic_value;
use std::{backtrace::Backtrace, panic};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=info,sqlx=warn";

pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

/// Route panics through `tracing` with a captured backtrace.
///
/// The hook runs at the panic site, before the request's error boundary
/// recovers the panic, so the backtrace still contains the failing frames.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let message = panic_value(info.payload());
        let location = info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "<unknown>".to_string());
        let backtrace = Backtrace::force_capture();

        tracing::error!(
            panic.message = %message,
            panic.location = %location,
            backtrace = %backtrace,
            "panic"
        );
    }));
}
