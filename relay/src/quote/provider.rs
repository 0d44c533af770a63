use async_trait::async_trait;

use crate::error::RelayError;
use crate::quote::types::GlobalQuoteEnvelope;
use crate::ticker::Ticker;

/// Source of raw `GLOBAL_QUOTE` documents.
///
/// Implementations perform exactly one upstream attempt per call and never
/// cache: two calls for the same ticker are two round-trips.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_global_quote(&self, ticker: &Ticker) -> Result<GlobalQuoteEnvelope, RelayError>;
}
