use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::error::{ErrorKind, RelayError};

pub const INVALID_TICKER_MESSAGE: &str = "Invalid ticker symbol.";
pub const NOT_FOUND_MESSAGE: &str = "No data found for the given ticker.";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "An error occurred while fetching the quote.";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Single exit point for failed lookups. Upstream failures are logged here
/// and nowhere else; the caller only ever sees the fixed message.
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let message = match self.kind() {
            ErrorKind::Validation => INVALID_TICKER_MESSAGE,
            ErrorKind::NotFound => NOT_FOUND_MESSAGE,
            ErrorKind::Upstream => {
                error!(error = %self, "quote lookup failed");
                UPSTREAM_FAILURE_MESSAGE
            }
        };

        (self.status(), Json(ErrorBody { error: message })).into_response()
    }
}
