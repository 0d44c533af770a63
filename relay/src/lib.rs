pub mod config;
pub mod error;
pub mod http;
pub mod quote;
pub mod relay;
pub mod shutdown;
pub mod ticker;
