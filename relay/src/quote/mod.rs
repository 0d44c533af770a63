pub mod client;
pub mod provider;
pub mod types;

pub use client::AlphaVantageClient;
pub use provider::QuoteProvider;
pub use types::*;
