//! Dashboard presentation layer.
//!
//! The display state machine and view model are pure and always available;
//! the async controller that wires them to the client lives behind the
//! `http` feature.

#[cfg(feature = "http")]
pub mod controller;
pub mod state;
pub mod view;

#[cfg(feature = "http")]
pub use controller::Dashboard;
pub use state::{DashboardState, Phase};
pub use view::{build_view, ChartPoint, DashboardView};
