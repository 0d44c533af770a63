use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("invalid ticker symbol")]
    InvalidTicker,

    #[error("no quote data for ticker {0}")]
    NotFound(String),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("malformed upstream payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Caller-facing classification of a [`RelayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Upstream,
}

impl RelayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RelayError::InvalidTicker => ErrorKind::Validation,
            RelayError::NotFound(_) => ErrorKind::NotFound,
            RelayError::Upstream(_) | RelayError::MalformedPayload(_) => ErrorKind::Upstream,
        }
    }
}
