use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, Span, info};

use common::logger::{TraceId, request_span};

pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Wraps each request in a `request` span and logs its outcome.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let trace_id = TraceId::default();
    let span = request_span(&trace_id, req.method().as_str(), req.uri().path());
    let started = Instant::now();

    async move {
        let mut resp = next.run(req).await;

        let status = resp.status().as_u16();
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let current = Span::current();
        current.record("status", status);
        current.record("elapsed_ms", elapsed_ms);

        info!(status, elapsed_ms, "request completed");

        if let Ok(value) = HeaderValue::from_str(trace_id.as_str()) {
            resp.headers_mut().insert(TRACE_ID_HEADER, value);
        }

        resp
    }
    .instrument(span)
    .await
}
