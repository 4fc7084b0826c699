// src/presentation/http/routes.rs
use crate::presentation::http::{
    boundary::{self, HandlerResult},
    controllers::{auth, system},
    error::AppError,
    state::HttpState,
};
use axum::{
    Extension, Router,
    extract::{DefaultBodyLimit, Request},
    http::Method,
    response::{IntoResponse, Response},
};
use futures::future::BoxFuture;
use std::{collections::HashMap, future::Future, sync::Arc};
use tower_http::trace::TraceLayer;

pub type HandlerFuture = BoxFuture<'static, HandlerResult>;

pub type Handler = Arc<dyn Fn(HttpState, Request) -> HandlerFuture + Send + Sync>;

/// Outcome of looking up a request in the [`RouteTable`].
pub enum Resolution<'a> {
    Matched(&'a Handler),
    MethodNotAllowed,
    RouteNotFound,
}

impl Resolution<'_> {
    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }
}

/// Literal path → method → handler. Built once at startup and read-only
/// afterwards; there is no pattern matching.
#[derive(Default)]
pub struct RouteTable {
    routes: HashMap<&'static str, HashMap<Method, Handler>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route<H, Fut>(mut self, path: &'static str, method: Method, handler: H) -> Self
    where
        H: Fn(HttpState, Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        let handler: Handler =
            Arc::new(move |state: HttpState, request: Request| -> HandlerFuture {
                Box::pin(handler(state, request))
            });

        if self
            .routes
            .entry(path)
            .or_default()
            .insert(method.clone(), handler)
            .is_some()
        {
            tracing::warn!(path, %method, "route registered twice; keeping the last handler");
        }
        self
    }

    /// Path first, then method. A known path with an unknown method is never
    /// reported as a missing route.
    pub fn resolve(&self, path: &str, method: &Method) -> Resolution<'_> {
        let Some(methods) = self.routes.get(path) else {
            return Resolution::RouteNotFound;
        };
        match methods.get(method) {
            Some(handler) => Resolution::Matched(handler),
            None => Resolution::MethodNotAllowed,
        }
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }

    pub fn methods(&self, path: &str) -> Vec<Method> {
        self.routes
            .get(path)
            .map(|methods| methods.keys().cloned().collect())
            .unwrap_or_default()
    }
}

/// Resolves each request against the route table and runs the matched
/// handler inside the error boundary.
pub struct Dispatcher {
    table: RouteTable,
    state: HttpState,
}

impl Dispatcher {
    pub fn new(table: RouteTable, state: HttpState) -> Self {
        Self { table, state }
    }

    pub async fn dispatch(&self, request: Request) -> Response {
        let method = request.method().clone();
        let path = request.uri().path().to_owned();

        match self.table.resolve(&path, &method) {
            Resolution::RouteNotFound => AppError::route_not_found(path).into_response(),
            Resolution::MethodNotAllowed => {
                AppError::method_not_allowed(method, path).into_response()
            }
            Resolution::Matched(handler) => {
                let state = self.state.clone();
                boundary::guard(|| handler(state, request)).await
            }
        }
    }
}

async fn dispatch(Extension(dispatcher): Extension<Arc<Dispatcher>>, request: Request) -> Response {
    dispatcher.dispatch(request).await
}

pub fn route_table() -> RouteTable {
    RouteTable::new()
        .route("/health", Method::GET, system::health)
        .route("/api/auth/register", Method::POST, auth::register)
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_table(route_table(), state)
}

/// Every request is answered by the dispatcher, which axum sees as the
/// router's fallback.
pub fn build_router_with_table(table: RouteTable, state: HttpState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);
    let dispatcher = Arc::new(Dispatcher::new(table, state));

    Router::new()
        .fallback(dispatch)
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(dispatcher))
}
