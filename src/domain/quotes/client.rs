//! Quotes sub-client — daily series fetch plus server-side data triggers.

use crate::client::StockboardClient;
use crate::domain::quotes::wire::{GenerateRecentAck, RefreshAck};
use crate::domain::quotes::{DailyQuote, PriceSeries, QuoteError};
use crate::error::SdkError;

/// Sub-client for quote operations.
pub struct Quotes<'a> {
    pub(crate) client: &'a StockboardClient,
}

impl<'a> Quotes<'a> {
    /// Fetch the full daily series, newest-first, validated record by
    /// record. A corrupted record fails the whole fetch rather than leaking
    /// into the analytics.
    pub async fn latest(&self) -> Result<PriceSeries, SdkError> {
        let resp = self.client.http.get_stocks().await?;

        let mut quotes = Vec::with_capacity(resp.stocks.len());
        for record in resp.stocks {
            let quote = DailyQuote::try_from(record)
                .map_err(|e: QuoteError| SdkError::Validation(e.to_string()))?;
            quotes.push(quote);
        }

        Ok(PriceSeries::from_newest_first(quotes))
    }

    /// Ask the backend to recompute today's record.
    pub async fn refresh(&self) -> Result<RefreshAck, SdkError> {
        Ok(self.client.http.refresh().await?)
    }

    /// Ask the backend to regenerate the trailing 30-day window.
    pub async fn generate_recent(&self) -> Result<GenerateRecentAck, SdkError> {
        Ok(self.client.http.generate_recent().await?)
    }
}
