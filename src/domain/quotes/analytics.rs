//! Derived metrics over a price series.
//!
//! All math uses `rust_decimal::Decimal` for exact arithmetic. No async, no
//! network calls; every function recomputes from scratch on each call.

use super::series::PriceSeries;
use rust_decimal::Decimal;

/// Day-over-day change between the two most recent closes.
#[derive(Debug, Clone, PartialEq)]
pub struct DayChange {
    pub absolute: Decimal,
    /// `None` when the previous close was zero and the percentage is
    /// undefined. Renders as a placeholder, never as a number.
    pub percent: Option<Decimal>,
}

impl DayChange {
    /// The well-formed default for series with fewer than two records.
    pub fn flat() -> Self {
        Self {
            absolute: Decimal::ZERO,
            percent: Some(Decimal::ZERO),
        }
    }
}

/// Vertical axis bounds for the price chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// Axis policy: a window centered on the current price, expanded whenever
/// observed data would be clipped.
#[derive(Debug, Clone)]
pub struct AxisConfig {
    /// Half-height of the window centered on the current price.
    pub window: Decimal,
    /// Padding kept outside the observed extremes.
    pub margin: Decimal,
    /// Center used when the series has no positive close and the current
    /// price is not positive either.
    pub fallback_center: Decimal,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            window: Decimal::from(2_000),
            margin: Decimal::from(500),
            fallback_center: Decimal::from(38_000),
        }
    }
}

/// Compute the change between the two most recent closes of a newest-first
/// series.
///
/// Fewer than two records yields [`DayChange::flat`]. A zero previous close
/// yields `percent: None` (the absolute change is still reported).
pub fn day_change(series: &PriceSeries) -> DayChange {
    let (current, previous) = match (series.latest(), series.previous()) {
        (Some(current), Some(previous)) => (current.close, previous.close),
        _ => return DayChange::flat(),
    };

    let absolute = current - previous;
    let percent = if previous.is_zero() {
        None
    } else {
        Some(absolute / previous * Decimal::ONE_HUNDRED)
    };

    DayChange { absolute, percent }
}

/// Resolve the chart's vertical axis bounds.
///
/// Zero closes are data-entry artifacts and do not participate; with no
/// usable close at all, the result is the pure window around
/// `current_price`, or around [`AxisConfig::fallback_center`] when the
/// current price is not positive. Whenever a positive close exists, the
/// returned range contains every one of them, and `min` is never negative.
pub fn axis_range(
    series: &PriceSeries,
    current_price: Decimal,
    cfg: &AxisConfig,
) -> AxisRange {
    let mut observed: Option<(Decimal, Decimal)> = None;
    for quote in series.quotes() {
        if quote.close > Decimal::ZERO {
            observed = Some(match observed {
                None => (quote.close, quote.close),
                Some((min, max)) => (min.min(quote.close), max.max(quote.close)),
            });
        }
    }

    let Some((observed_min, observed_max)) = observed else {
        let center = if current_price > Decimal::ZERO {
            current_price
        } else {
            cfg.fallback_center
        };
        return AxisRange {
            min: (center - cfg.window).max(Decimal::ZERO),
            max: center + cfg.window,
        };
    };

    let window_min = (current_price - cfg.window).max(Decimal::ZERO);
    let window_max = current_price + cfg.window;

    // Expand past the window if data would be clipped; the zero clamp cannot
    // lift min above observed_min because observed closes are positive.
    AxisRange {
        min: window_min.min(observed_min - cfg.margin).max(Decimal::ZERO),
        max: window_max.max(observed_max + cfg.margin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quotes::DailyQuote;
    use chrono::NaiveDate;

    fn quote(id: i64, date: &str, close: Decimal) -> DailyQuote {
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

    // Newest-first, one synthetic day apart.
    fn series(closes: &[i64]) -> PriceSeries {
        let quotes = closes
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let day = (closes.len() - i) as u32;
                quote(
                    i as i64,
                    &format!("2024-01-{:02}", day),
                    Decimal::from(*c),
                )
            })
            .collect();
        PriceSeries::from_newest_first(quotes)
    }

    #[test]
    fn test_change_on_empty_and_singleton() {
        assert_eq!(day_change(&series(&[])), DayChange::flat());
        assert_eq!(day_change(&series(&[38_000])), DayChange::flat());
    }

    #[test]
    fn test_change_sign_matches_direction() {
        let up = day_change(&series(&[110, 100]));
        assert_eq!(up.absolute, Decimal::from(10));
        assert_eq!(up.percent, Some(Decimal::from(10)));

        let down = day_change(&series(&[90, 100]));
        assert_eq!(down.absolute, Decimal::from(-10));
        assert_eq!(down.percent, Some(Decimal::from(-10)));
    }

    #[test]
    fn test_change_with_zero_previous_close_is_unknown() {
        let change = day_change(&series(&[100, 0]));
        assert_eq!(change.absolute, Decimal::from(100));
        assert_eq!(change.percent, None);
    }

    #[test]
    fn test_change_end_to_end_values() {
        let change = day_change(&series(&[38_500, 38_200, 38_000]));
        assert_eq!(change.absolute, Decimal::from(300));
        // 300 / 38200 * 100
        assert_eq!(
            change.percent.unwrap().round_dp(3),
            "0.785".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_axis_window_dominates_when_data_fits() {
        let range = axis_range(
            &series(&[38_500, 38_200, 38_000]),
            Decimal::from(38_500),
            &AxisConfig::default(),
        );
        assert_eq!(range.min, Decimal::from(36_500));
        assert_eq!(range.max, Decimal::from(40_500));
    }

    #[test]
    fn test_axis_expands_past_clipped_data() {
        // 35000 sits below the 36500 window floor; the margin pushes further.
        let range = axis_range(
            &series(&[38_500, 35_000]),
            Decimal::from(38_500),
            &AxisConfig::default(),
        );
        assert_eq!(range.min, Decimal::from(34_500));
        assert_eq!(range.max, Decimal::from(40_500));
    }

    #[test]
    fn test_axis_always_contains_observed_positive_closes() {
        let s = series(&[100, 300, 9_000]);
        let range = axis_range(&s, Decimal::from(10_000), &AxisConfig::default());
        assert!(range.min <= Decimal::from(100));
        assert!(range.max >= Decimal::from(9_000));
        assert!(range.min >= Decimal::ZERO);
    }

    #[test]
    fn test_axis_min_never_negative() {
        let range = axis_range(
            &series(&[500]),
            Decimal::from(500),
            &AxisConfig::default(),
        );
        assert_eq!(range.min, Decimal::ZERO);
        assert_eq!(range.max, Decimal::from(2_500));
    }

    #[test]
    fn test_axis_ignores_zero_closes() {
        // Zeros are artifacts; only the positive close participates.
        let range = axis_range(
            &series(&[38_500, 0, 0]),
            Decimal::from(38_500),
            &AxisConfig::default(),
        );
        assert_eq!(range.min, Decimal::from(36_500));
        assert_eq!(range.max, Decimal::from(40_500));
    }

    #[test]
    fn test_axis_fallback_when_no_usable_close() {
        // All-zero series and a zero current price: window around the
        // configured fallback center.
        let range = axis_range(&series(&[0, 0]), Decimal::ZERO, &AxisConfig::default());
        assert_eq!(range.min, Decimal::from(36_000));
        assert_eq!(range.max, Decimal::from(40_000));

        // A positive current price wins over the fallback.
        let range = axis_range(&series(&[]), Decimal::from(1_000), &AxisConfig::default());
        assert_eq!(range.min, Decimal::ZERO);
        assert_eq!(range.max, Decimal::from(3_000));
    }
}
