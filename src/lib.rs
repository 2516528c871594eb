//! # Stockboard SDK
//!
//! A Rust SDK for the Stockboard price dashboard: typed access to the local
//! stock data service plus the pure series analytics the dashboard renders
//! (latest price, day-over-day change, chart series, axis range).
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain types, wire formats, pure analytics
//! 2. **HTTP API** — `StockboardHttp` with one method per backend endpoint
//! 3. **High-Level Client** — `StockboardClient` with nested sub-clients
//! 4. **Dashboard** — App-owned display state machine + view model builder
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockboard_sdk::prelude::*;
//!
//! let client = StockboardClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! let series = client.quotes().latest().await?;
//! let view = build_view(&series, &AxisConfig::default());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting used across all modules.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, analytics.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per data-service endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `StockboardClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Dashboard ───────────────────────────────────────────────────────

/// Display state machine, view model, and (with `http`) the async controller.
pub mod dashboard;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::Symbol;

    // Domain types — quotes
    pub use crate::domain::quotes::{DailyQuote, PriceSeries, QuoteError};

    // Analytics
    pub use crate::domain::quotes::analytics::{
        axis_range, day_change, AxisConfig, AxisRange, DayChange,
    };

    // Dashboard
    pub use crate::dashboard::state::{DashboardState, Phase};
    pub use crate::dashboard::view::{build_view, ChartPoint, DashboardView};
    #[cfg(feature = "http")]
    pub use crate::dashboard::Dashboard;

    // Errors
    pub use crate::error::SdkError;

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{QuotesClient, StockboardClient, StockboardClientBuilder};
}
