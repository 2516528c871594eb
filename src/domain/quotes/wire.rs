//! Wire types for the stock data service (REST).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// REST response for a single daily record, exactly as the backend sends it.
///
/// Prices arrive as JSON numbers; the full backend includes the indicator
/// columns, the simplified variant does not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteResponse {
    pub id: i64,
    #[serde(default)]
    pub symbol: Option<String>,
    pub date: NaiveDate,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
    pub volume: i64,

    #[serde(default)]
    pub dividend_yield_simple: Option<f64>,
    #[serde(default)]
    pub dividend_yield_index: Option<f64>,
    #[serde(default)]
    pub per_weighted: Option<f64>,
    #[serde(default)]
    pub per_index: Option<f64>,
    #[serde(default)]
    pub pbr_weighted: Option<f64>,
    #[serde(default)]
    pub pbr_index: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub trading_value: Option<f64>,
    #[serde(default)]
    pub market_share: Option<f64>,
}

/// REST response for `GET /stocks`. Records are newest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StocksResponse {
    pub stocks: Vec<QuoteResponse>,
}

/// REST ack for `POST /stocks/refresh`.
///
/// The dashboard treats this call as success/failure only; the fields are
/// captured because the backend sends them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshAck {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub new_price: Option<f64>,
}

/// REST ack for `POST /stocks/generate-recent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRecentAck {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub latest_price: Option<f64>,
}
