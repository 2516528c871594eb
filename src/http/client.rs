//! Low-level HTTP client — `StockboardHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens in the sub-clients). Internal to the SDK — the high-level
//! client wraps this.

use crate::domain::quotes::wire::{GenerateRecentAck, RefreshAck, StocksResponse};
use crate::error::HttpError;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the stock data service.
pub struct StockboardHttp {
    base_url: String,
    client: Client,
}

impl StockboardHttp {
    pub fn new(base_url: &str) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Stocks ───────────────────────────────────────────────────────────

    /// `GET /stocks` — the full daily series, newest-first.
    pub async fn get_stocks(&self) -> Result<StocksResponse, HttpError> {
        let url = format!("{}/stocks", self.base_url);
        self.get(&url).await
    }

    /// `POST /stocks/refresh` — recompute today's record server-side.
    pub async fn refresh(&self) -> Result<RefreshAck, HttpError> {
        let url = format!("{}/stocks/refresh", self.base_url);
        self.post(&url, &serde_json::json!({})).await
    }

    /// `POST /stocks/generate-recent` — regenerate the trailing 30-day
    /// window server-side.
    pub async fn generate_recent(&self) -> Result<GenerateRecentAck, HttpError> {
        let url = format!("{}/stocks/generate-recent", self.base_url);
        self.post(&url, &serde_json::json!({})).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::GET, url, None::<&()>).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::POST, url, Some(body)).await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method, url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for StockboardHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
        }
    }
}
