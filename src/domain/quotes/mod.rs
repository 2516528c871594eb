//! Quote domain — daily OHLCV records and the analytics derived from them.

pub mod analytics;
#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod series;
pub mod wire;

use crate::shared::Symbol;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use series::PriceSeries;

/// One trading day's validated observation.
///
/// Prices are non-negative; a zero price is a data-entry artifact that is
/// accepted here and filtered out of axis-range consideration downstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyQuote {
    pub id: i64,
    /// The simplified backend variant omits the symbol column.
    pub symbol: Option<Symbol>,
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,

    // Indicator columns, pass-through only. The SDK never computes with
    // these; the dashboard displays them verbatim.
    pub dividend_yield_simple: Option<Decimal>,
    pub dividend_yield_index: Option<Decimal>,
    pub per_weighted: Option<Decimal>,
    pub per_index: Option<Decimal>,
    pub pbr_weighted: Option<Decimal>,
    pub pbr_index: Option<Decimal>,
    pub market_cap: Option<Decimal>,
    pub trading_value: Option<Decimal>,
    pub market_share: Option<Decimal>,
}

/// Validation failures when converting a wire record into a [`DailyQuote`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    #[error("{field} is not a finite number: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} is negative: {value}")]
    NegativePrice { field: &'static str, value: f64 },

    #[error("volume is negative: {0}")]
    NegativeVolume(i64),
}
