use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use quote_relay::{
    error::RelayError,
    http::{self, middleware::TRACE_ID_HEADER},
    quote::{GlobalQuoteEnvelope, QuoteProvider},
    ticker::Ticker,
};

// -----------------------
// Stub provider + helpers
// -----------------------

enum Reply {
    Body(Value),
    Malformed,
}

struct StubProvider {
    calls: AtomicUsize,
    seen: std::sync::Mutex<Vec<String>>,
    reply: Reply,
}

impl StubProvider {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            seen: std::sync::Mutex::new(Vec::new()),
            reply,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteProvider for StubProvider {
    async fn fetch_global_quote(&self, ticker: &Ticker) -> Result<GlobalQuoteEnvelope, RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(ticker.to_string());

        match &self.reply {
            Reply::Body(v) => Ok(serde_json::from_value(v.clone())?),
            Reply::Malformed => Ok(serde_json::from_str("not json")?),
        }
    }
}

/// Serves the real router on an ephemeral port and returns its base url.
async fn spawn_app(provider: Arc<StubProvider>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, http::router(provider)).await.unwrap();
    });

    format!("http://{addr}")
}

fn ibm_partial() -> Value {
    json!({
        "Global Quote": {
            "01. symbol": "IBM",
            "02. open": "130.00",
            "05. price": "131.50"
        }
    })
}

// -----------------------
// Tests
// -----------------------

#[tokio::test]
async fn index_returns_welcome_text() {
    let base = spawn_app(StubProvider::new(Reply::Body(json!({})))).await;

    let resp = reqwest::get(format!("{base}/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.text().await.unwrap(),
        "Welcome to the Stock Quote API. Use /quote/:ticker to get a stock quote."
    );
}

#[tokio::test]
async fn ibm_quote_is_relayed_with_missing_fields_omitted() {
    let provider = StubProvider::new(Reply::Body(ibm_partial()));
    let base = spawn_app(provider.clone()).await;

    let resp = reqwest::get(format!("{base}/quote/IBM")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(TRACE_ID_HEADER));

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "symbol": "IBM", "open": "130.00", "price": "131.50" })
    );
    assert_eq!(provider.seen.lock().unwrap().as_slice(), ["IBM"]);
}

#[tokio::test]
async fn full_quote_keeps_field_order() {
    let provider = StubProvider::new(Reply::Body(json!({
        "Global Quote": {
            "10. change percent": "1.2317%",
            "09. change": "1.6000",
            "08. previous close": "129.90",
            "07. latest trading day": "2024-05-10",
            "06. volume": "4211234",
            "05. price": "131.50",
            "04. low": "129.75",
            "03. high": "132.10",
            "02. open": "130.00",
            "01. symbol": "IBM"
        }
    })));
    let base = spawn_app(provider).await;

    let text = reqwest::get(format!("{base}/quote/IBM"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(
        text,
        r#"{"symbol":"IBM","open":"130.00","high":"132.10","low":"129.75","price":"131.50","volume":"4211234","latestTradingDay":"2024-05-10","previousClose":"129.90","change":"1.6000","changePercent":"1.2317%"}"#
    );
}

#[tokio::test]
async fn missing_ticker_is_rejected_without_upstream_call() {
    let provider = StubProvider::new(Reply::Body(ibm_partial()));
    let base = spawn_app(provider.clone()).await;

    for path in ["/quote", "/quote/"] {
        let resp = reqwest::get(format!("{base}{path}")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "path {path}");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Invalid ticker symbol." }));
    }

    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn empty_global_quote_is_404() {
    let base = spawn_app(StubProvider::new(Reply::Body(json!({ "Global Quote": {} })))).await;

    let resp = reqwest::get(format!("{base}/quote/NOPE")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "No data found for the given ticker." }));
}

#[tokio::test]
async fn absent_global_quote_is_404() {
    let provider = StubProvider::new(Reply::Body(json!({
        "Information": "Our standard API rate limit is 25 requests per day."
    })));
    let base = spawn_app(provider).await;

    let resp = reqwest::get(format!("{base}/quote/IBM")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_array_or_odd_advisory_is_404() {
    for body in [
        json!({ "Global Quote": [] }),
        json!({ "Note": ["not", "a", "string"] }),
    ] {
        let base = spawn_app(StubProvider::new(Reply::Body(body))).await;

        let resp = reqwest::get(format!("{base}/quote/IBM")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn upstream_failure_is_generic_500() {
    let base = spawn_app(StubProvider::new(Reply::Malformed)).await;

    let resp = reqwest::get(format!("{base}/quote/IBM")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "error": "An error occurred while fetching the quote." })
    );
}

#[tokio::test]
async fn repeated_requests_are_not_cached() {
    let provider = StubProvider::new(Reply::Body(ibm_partial()));
    let base = spawn_app(provider.clone()).await;

    let first: Value = reqwest::get(format!("{base}/quote/IBM"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = reqwest::get(format!("{base}/quote/IBM"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(provider.calls(), 2);
}
