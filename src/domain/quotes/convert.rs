//! Conversion: wire records → validated domain quotes.
//!
//! Prices and volume are the fields charts and percentages are computed
//! from, so corrupted values (NaN, infinities, negatives) are rejected here
//! instead of propagating into an axis domain or a rendered change figure.

use super::wire;
use super::{DailyQuote, QuoteError};
use crate::shared::Symbol;
use rust_decimal::Decimal;

fn price(field: &'static str, value: f64) -> Result<Decimal, QuoteError> {
    if !value.is_finite() {
        return Err(QuoteError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(QuoteError::NegativePrice { field, value });
    }
    Decimal::try_from(value).map_err(|_| QuoteError::NonFinite { field, value })
}

// Indicators are opaque pass-throughs: finiteness is required to represent
// them at all, but sign is not policed.
fn indicator(
    field: &'static str,
    value: Option<f64>,
) -> Result<Option<Decimal>, QuoteError> {
    match value {
        None => Ok(None),
        Some(v) => Decimal::try_from(v)
            .map(Some)
            .map_err(|_| QuoteError::NonFinite { field, value: v }),
    }
}

impl TryFrom<wire::QuoteResponse> for DailyQuote {
    type Error = QuoteError;

    fn try_from(source: wire::QuoteResponse) -> Result<Self, Self::Error> {
        let volume = u64::try_from(source.volume)
            .map_err(|_| QuoteError::NegativeVolume(source.volume))?;

        Ok(DailyQuote {
            id: source.id,
            symbol: source.symbol.map(Symbol::from),
            date: source.date,
            open: price("open_price", source.open_price)?,
            high: price("high_price", source.high_price)?,
            low: price("low_price", source.low_price)?,
            close: price("close_price", source.close_price)?,
            volume,
            dividend_yield_simple: indicator(
                "dividend_yield_simple",
                source.dividend_yield_simple,
            )?,
            dividend_yield_index: indicator(
                "dividend_yield_index",
                source.dividend_yield_index,
            )?,
            per_weighted: indicator("per_weighted", source.per_weighted)?,
            per_index: indicator("per_index", source.per_index)?,
            pbr_weighted: indicator("pbr_weighted", source.pbr_weighted)?,
            pbr_index: indicator("pbr_index", source.pbr_index)?,
            market_cap: indicator("market_cap", source.market_cap)?,
            trading_value: indicator("trading_value", source.trading_value)?,
            market_share: indicator("market_share", source.market_share)?,
        })
    }
}
