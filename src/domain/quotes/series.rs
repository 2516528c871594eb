//! Price series container — app-owned, SDK-provided ordering logic.

use super::DailyQuote;

/// An ordered run of daily quotes, newest-first as the backend sends them.
///
/// The series is replaced wholesale on every fetch; there is no incremental
/// mutation. The empty series is valid everywhere downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    quotes: Vec<DailyQuote>,
}

impl PriceSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records already in newest-first order.
    pub fn from_newest_first(quotes: Vec<DailyQuote>) -> Self {
        Self { quotes }
    }

    /// Replace all records (e.g. from a REST fetch).
    pub fn replace(&mut self, quotes: Vec<DailyQuote>) {
        self.quotes = quotes;
    }

    /// Records in newest-first order.
    pub fn quotes(&self) -> &[DailyQuote] {
        &self.quotes
    }

    /// The most recent record.
    pub fn latest(&self) -> Option<&DailyQuote> {
        self.quotes.first()
    }

    /// The second-most-recent record.
    pub fn previous(&self) -> Option<&DailyQuote> {
        self.quotes.get(1)
    }

    /// A new oldest-first sequence for charting. The container itself is
    /// left untouched.
    pub fn oldest_first(&self) -> Vec<DailyQuote> {
        let mut ordered = self.quotes.clone();
        ordered.reverse();
        ordered
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
