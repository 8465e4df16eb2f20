//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::config::FALLBACK_QUOTE;
use crate::core::state::App;
use crate::core::todo::Item;
use crate::quote::{QuoteError, QuoteProvider};

/// A provider that always returns the same quote.
pub struct StaticQuoteProvider(pub &'static str);

#[async_trait]
impl QuoteProvider for StaticQuoteProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<String, QuoteError> {
        Ok(self.0.to_string())
    }
}

/// A provider that always fails, as if the network were down.
pub struct FailingQuoteProvider;

#[async_trait]
impl QuoteProvider for FailingQuoteProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self) -> Result<String, QuoteError> {
        Err(QuoteError::Network("unreachable".to_string()))
    }
}

/// Creates an empty test App.
pub fn test_app() -> App {
    test_app_with(Vec::new())
}

/// Creates a test App holding `items`.
pub fn test_app_with(items: Vec<Item>) -> App {
    App::new(items, FALLBACK_QUOTE.to_string())
}
