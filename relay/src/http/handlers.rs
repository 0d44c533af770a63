use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use super::AppState;
use crate::error::RelayError;
use crate::quote::Quote;
use crate::relay;

pub const WELCOME: &str =
    "Welcome to the Stock Quote API. Use /quote/:ticker to get a stock quote.";

pub async fn index() -> &'static str {
    WELCOME
}

/// `GET /quote/{ticker}`. A segment that fails to decode is treated as
/// a missing ticker.
pub async fn quote(
    State(state): State<AppState>,
    ticker: Result<Path<String>, PathRejection>,
) -> Result<Json<Quote>, RelayError> {
    let ticker = ticker.ok().map(|Path(t)| t);
    let quote = relay::get_quote(state.provider.as_ref(), ticker.as_deref()).await?;
    Ok(Json(quote))
}

/// `GET /quote` and `GET /quote/`.
pub async fn missing_ticker(State(state): State<AppState>) -> Result<Json<Quote>, RelayError> {
    let quote = relay::get_quote(state.provider.as_ref(), None).await?;
    Ok(Json(quote))
}
