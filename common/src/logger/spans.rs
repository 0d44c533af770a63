use tracing::{Span, field};

use super::TraceId;

/// Root span for one inbound HTTP request.
///
/// `status` and `elapsed_ms` start empty and are recorded once the response
/// is produced.
pub fn request_span(trace_id: &TraceId, method: &str, path: &str) -> Span {
    tracing::info_span!(
        "request",
        trace_id = %trace_id,
        method = %method,
        path = %path,
        status = field::Empty,
        elapsed_ms = field::Empty
    )
}

/// Child span; inherits trace_id from the enclosing request span.
pub fn child_span(name: &'static str) -> Span {
    tracing::info_span!("child", name = %name)
}
