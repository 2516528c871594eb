//! Async dashboard controller — fetch, guard, and state application.

use crate::client::StockboardClient;
use crate::dashboard::state::{DashboardState, Phase};
use crate::dashboard::view::{build_view, DashboardView};
use crate::domain::quotes::analytics::AxisConfig;
use crate::error::SdkError;

use async_lock::RwLock;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Owns a client plus the display state, keeping at most one fetch in
/// flight. Cheap to clone; clones share the same state.
pub struct Dashboard {
    client: StockboardClient,
    axis_config: AxisConfig,
    state: Arc<RwLock<DashboardState>>,
}

impl Dashboard {
    pub fn new(client: StockboardClient) -> Self {
        Self::with_axis_config(client, AxisConfig::default())
    }

    pub fn with_axis_config(client: StockboardClient, axis_config: AxisConfig) -> Self {
        Self {
            client,
            axis_config,
            state: Arc::new(RwLock::new(DashboardState::new())),
        }
    }

    /// Fetch the series and apply it.
    ///
    /// A call that arrives while another fetch is in flight is suppressed.
    /// A failed fetch keeps the previous display and propagates the error.
    pub async fn load(&self) -> Result<(), SdkError> {
        if !self.state.write().await.begin_fetch() {
            tracing::debug!("fetch already in flight; skipping");
            return Ok(());
        }

        match self.client.quotes().latest().await {
            Ok(series) => {
                self.state.write().await.apply_fetch(series, Utc::now());
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "stock fetch failed; keeping last data");
                self.state.write().await.fail_fetch();
                Err(e)
            }
        }
    }

    /// Trigger a server-side recompute of today's record, then reload.
    pub async fn refresh(&self) -> Result<(), SdkError> {
        self.client.quotes().refresh().await?;
        self.load().await
    }

    /// Regenerate the trailing 30-day window server-side, then reload.
    pub async fn seed_recent(&self) -> Result<(), SdkError> {
        self.client.quotes().generate_recent().await?;
        self.load().await
    }

    pub async fn phase(&self) -> Phase {
        self.state.read().await.phase()
    }

    pub async fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.last_updated()
    }

    /// Current view model, `None` until data has arrived.
    pub async fn view(&self) -> Option<DashboardView> {
        let state = self.state.read().await;
        build_view(state.series(), &self.axis_config)
    }
}

impl Clone for Dashboard {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            axis_config: self.axis_config.clone(),
            state: self.state.clone(),
        }
    }
}
