//! # Quote Provider
//!
//! Supplies the one-line quote shown under the clock.
//!
//! The widget never sees a failure from this module: `fetch_or_fallback`
//! swallows every error and hands back the fixed fallback string instead.

pub mod http;
pub mod provider;

pub use http::HttpQuoteProvider;
pub use provider::{QuoteError, QuoteProvider};

use log::{debug, warn};

/// Fetch a quote, substituting `fallback` on any error.
pub async fn fetch_or_fallback(provider: &dyn QuoteProvider, fallback: &str) -> String {
    match provider.fetch().await {
        Ok(quote) => {
            debug!("Quote from {}: {} chars", provider.name(), quote.chars().count());
            quote
        }
        Err(e) => {
            warn!("Quote fetch from {} failed, using fallback: {}", provider.name(), e);
            fallback.to_string()
        }
    }
}
