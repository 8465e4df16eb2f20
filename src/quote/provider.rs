use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while fetching a quote.
/// Callers only log these; the user sees the fallback string.
#[derive(Debug)]
pub enum QuoteError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Service answered with a non-success status.
    Api { status: u16 },
    /// Body was not the expected JSON.
    Parse(String),
    /// Body parsed but the quote text was blank.
    Empty,
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteError::Network(msg) => write!(f, "network error: {msg}"),
            QuoteError::Api { status } => write!(f, "quote service returned HTTP {status}"),
            QuoteError::Parse(msg) => write!(f, "parse error: {msg}"),
            QuoteError::Empty => write!(f, "quote service returned an empty quote"),
        }
    }
}

impl std::error::Error for QuoteError {}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetches a single quote.
    async fn fetch(&self) -> Result<String, QuoteError>;
}
