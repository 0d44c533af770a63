pub mod handlers;
pub mod middleware;
pub mod response;

use std::sync::Arc;

use axum::{Router, middleware::from_fn, routing::get};

use crate::quote::QuoteProvider;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn QuoteProvider>,
}

pub fn router(provider: Arc<dyn QuoteProvider>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/quote", get(handlers::missing_ticker))
        .route("/quote/", get(handlers::missing_ticker))
        .route("/quote/{ticker}", get(handlers::quote))
        .layer(from_fn(middleware::log_requests))
        .with_state(AppState { provider })
}
