//! Ticker symbol validation.
//!
//! A ticker is any non-empty string. Case, whitespace and character set are
//! passed to the provider untouched.

use std::fmt;

use crate::error::RelayError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker(String);

impl Ticker {
    pub fn parse(raw: &str) -> Result<Self, RelayError> {
        if raw.is_empty() {
            return Err(RelayError::InvalidTicker);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<Option<&str>> for Ticker {
    type Error = RelayError;

    fn try_from(raw: Option<&str>) -> Result<Self, Self::Error> {
        raw.map_or(Err(RelayError::InvalidTicker), Ticker::parse)
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
