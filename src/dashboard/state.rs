//! Display state container — app-owned, SDK-provided transition logic.

use crate::domain::quotes::PriceSeries;
use chrono::{DateTime, Utc};

/// Where the dashboard display currently is.
///
/// `Idle → Loading → Ready` on first load, `Ready → Loading → Ready` on
/// every refresh after that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
}

/// Display state for one dashboard.
///
/// The app owns instances of this type. The SDK provides transition methods.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    phase: Phase,
    series: PriceSeries,
    last_updated: Option<DateTime<Utc>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Enter `Loading`. Returns `false` without transitioning when a fetch
    /// is already in flight, so at most one is.
    pub fn begin_fetch(&mut self) -> bool {
        if self.phase == Phase::Loading {
            return false;
        }
        self.phase = Phase::Loading;
        true
    }

    /// Apply a successful fetch: replace the series wholesale and enter
    /// `Ready`.
    pub fn apply_fetch(&mut self, series: PriceSeries, fetched_at: DateTime<Utc>) {
        self.series = series;
        self.last_updated = Some(fetched_at);
        self.phase = Phase::Ready;
    }

    /// Record a failed fetch. Previously fetched data stays on display;
    /// with nothing fetched yet the dashboard returns to `Idle`.
    pub fn fail_fetch(&mut self) {
        self.phase = if self.series.is_empty() {
            Phase::Idle
        } else {
            Phase::Ready
        };
    }
}
