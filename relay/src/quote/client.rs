use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::AppConfig;
use crate::error::RelayError;
use crate::quote::provider::QuoteProvider;
use crate::quote::types::GlobalQuoteEnvelope;
use crate::ticker::Ticker;

const GLOBAL_QUOTE_FUNCTION: &str = "GLOBAL_QUOTE";

#[derive(Clone)]
pub struct AlphaVantageClient {
    http: Client,
    url: String,
    api_key: String,
}

impl AlphaVantageClient {
    pub fn new(cfg: &AppConfig) -> Result<Self, RelayError> {
        let http = Client::builder()
            .timeout(cfg.upstream_timeout)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            url: cfg.api_url.clone(),
            api_key: cfg.api_key.clone(),
        })
    }
}

// Request urls carry the api key, so every reqwest error is stripped of its
// url before it can reach a log line.
#[async_trait]
impl QuoteProvider for AlphaVantageClient {
    #[instrument(skip(self), fields(ticker = %ticker), level = "debug")]
    async fn fetch_global_quote(&self, ticker: &Ticker) -> Result<GlobalQuoteEnvelope, RelayError> {
        let resp = self
            .http
            .get(&self.url)
            .query(&[
                ("function", GLOBAL_QUOTE_FUNCTION),
                ("symbol", ticker.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;

        let body = resp.bytes().await.map_err(reqwest::Error::without_url)?;
        let envelope: GlobalQuoteEnvelope = serde_json::from_slice(&body)?;

        if let Some(advisory) = envelope.advisory() {
            warn!(advisory = %advisory, "provider returned an advisory instead of a quote");
        }

        debug!(
            has_quote = envelope.global_quote.as_ref().is_some_and(|m| !m.is_empty()),
            "global quote fetched"
        );

        Ok(envelope)
    }
}
