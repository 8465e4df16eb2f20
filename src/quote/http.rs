//! HTTP quote provider.
//!
//! One GET to a JSON endpoint shaped like:
//!
//! ```json
//! {"code": 200, "data": "The quote text"}
//! ```
//!
//! Only `data` is read. The whole request, body included, is bounded by the
//! configured timeout.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::quote::{QuoteError, QuoteProvider};

#[derive(Deserialize, Debug)]
struct QuoteResponse {
    data: String,
}

pub struct HttpQuoteProvider {
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpQuoteProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl QuoteProvider for HttpQuoteProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self) -> Result<String, QuoteError> {
        info!("Fetching quote from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        debug!("Quote response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Quote service error: HTTP {}", status);
            return Err(QuoteError::Api { status });
        }

        // A stalled body surfaces here as a network error.
        let body = response
            .text()
            .await
            .map_err(|e| QuoteError::Network(e.to_string()))?;
        let parsed: QuoteResponse =
            serde_json::from_str(&body).map_err(|e| QuoteError::Parse(e.to_string()))?;

        let quote = parsed.data.trim();
        if quote.is_empty() {
            return Err(QuoteError::Empty);
        }
        Ok(quote.to_string())
    }
}
