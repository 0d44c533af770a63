mod init;
mod spans;
mod trace_id;

pub use init::init_tracing;
pub use spans::{child_span, request_span};
pub use trace_id::TraceId;
