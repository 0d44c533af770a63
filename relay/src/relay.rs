//! The relay operation: validate, fetch once, remap.

use tracing::{Instrument, debug};

use common::logger::child_span;

use crate::error::RelayError;
use crate::quote::{Quote, QuoteProvider};
use crate::ticker::Ticker;

/// Looks up one quote.
///
/// An absent or empty ticker fails with [`RelayError::InvalidTicker`] before
/// the provider is touched. A provider document without quote data is
/// [`RelayError::NotFound`]; provider failures pass through unchanged.
pub async fn get_quote<P>(provider: &P, raw_ticker: Option<&str>) -> Result<Quote, RelayError>
where
    P: QuoteProvider + ?Sized,
{
    let ticker = Ticker::try_from(raw_ticker)?;

    let envelope = provider
        .fetch_global_quote(&ticker)
        .instrument(child_span("upstream_fetch"))
        .await?;

    let quote = envelope
        .into_quote()
        .ok_or_else(|| RelayError::NotFound(ticker.to_string()))?;

    debug!(ticker = %ticker, price = ?quote.price, "quote relayed");

    Ok(quote)
}
