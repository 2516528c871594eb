//! View model — everything the dashboard renders, derived in one pass.

use crate::domain::quotes::analytics::{self, AxisConfig, AxisRange, DayChange};
use crate::domain::quotes::{DailyQuote, PriceSeries};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single point on the price chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub close: Decimal,
    pub volume: u64,
}

/// Everything the dashboard renders for one fetched series.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Newest record. Price card, OHLC tiles, and indicator tiles all read
    /// from it.
    pub latest: DailyQuote,
    pub change: DayChange,
    /// Oldest-first, ready for charting.
    pub chart: Vec<ChartPoint>,
    pub axis: AxisRange,
}

/// Build the view model for a newest-first series.
///
/// Returns `None` for the empty series (nothing to display yet). A zero
/// latest close centers the axis on [`AxisConfig::fallback_center`] instead,
/// so one bad record cannot collapse the window onto zero.
pub fn build_view(series: &PriceSeries, cfg: &AxisConfig) -> Option<DashboardView> {
    let latest = series.latest()?.clone();

    let chart = series
        .oldest_first()
        .into_iter()
        .map(|q| ChartPoint {
            date: q.date,
            close: q.close,
            volume: q.volume,
        })
        .collect();

    let current = if latest.close.is_zero() {
        cfg.fallback_center
    } else {
        latest.close
    };
    let axis = analytics::axis_range(series, current, cfg);

    Some(DashboardView {
        change: analytics::day_change(series),
        chart,
        axis,
        latest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: i64, date: &str, close: i64) -> DailyQuote {
        let close = Decimal::from(close);
        DailyQuote {
            id,
            symbol: None,
            date: date.parse::<NaiveDate>().unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1_000_000,
            dividend_yield_simple: None,
            dividend_yield_index: None,
            per_weighted: None,
            per_index: None,
            pbr_weighted: None,
            pbr_index: None,
            market_cap: None,
            trading_value: None,
            market_share: None,
        }
    }

    #[test]
    fn test_empty_series_has_no_view() {
        assert!(build_view(&PriceSeries::new(), &AxisConfig::default()).is_none());
    }

    #[test]
    fn test_view_end_to_end() {
        let series = PriceSeries::from_newest_first(vec![
            quote(3, "2024-01-03", 38_500),
            quote(2, "2024-01-02", 38_200),
            quote(1, "2024-01-01", 38_000),
        ]);
        let view = build_view(&series, &AxisConfig::default()).unwrap();

        assert_eq!(view.latest.id, 3);
        assert_eq!(view.change.absolute, Decimal::from(300));

        let dates: Vec<_> = view.chart.iter().map(|p| p.date.to_string()).collect();
        assert_eq!(dates, ["2024-01-01", "2024-01-02", "2024-01-03"]);

        assert_eq!(view.axis.min, Decimal::from(36_500));
        assert_eq!(view.axis.max, Decimal::from(40_500));
    }

    #[test]
    fn test_zero_latest_close_uses_fallback_center() {
        // Only the zero record exists, so the axis is the pure window
        // around the fallback center.
        let series = PriceSeries::from_newest_first(vec![quote(1, "2024-01-01", 0)]);
        let view = build_view(&series, &AxisConfig::default()).unwrap();
        assert_eq!(view.axis.min, Decimal::from(36_000));
        assert_eq!(view.axis.max, Decimal::from(40_000));
    }
}
