//! High-level client — `StockboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder and the accessor methods.

use crate::domain::quotes::client::Quotes;
use crate::error::SdkError;
use crate::http::StockboardHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::quotes::client::Quotes as QuotesClient;

/// The primary entry point for the Stockboard SDK.
///
/// Provides nested sub-client accessors: `client.quotes()`.
pub struct StockboardClient {
    pub(crate) http: StockboardHttp,
}

impl StockboardClient {
    pub fn builder() -> StockboardClientBuilder {
        StockboardClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn quotes(&self) -> Quotes<'_> {
        Quotes { client: self }
    }
}

impl Clone for StockboardClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct StockboardClientBuilder {
    base_url: String,
}

impl Default for StockboardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
        }
    }
}

impl StockboardClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> Result<StockboardClient, SdkError> {
        Ok(StockboardClient {
            http: StockboardHttp::new(&self.base_url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_local_service() {
        let client = StockboardClient::builder().build().unwrap();
        assert_eq!(client.http.base_url(), crate::network::DEFAULT_API_URL);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = StockboardClient::builder()
            .base_url("http://localhost:9000/")
            .build()
            .unwrap();
        assert_eq!(client.http.base_url(), "http://localhost:9000");
    }
}
