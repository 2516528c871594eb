//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `series.rs` — Series container with ordering/replacement methods
//! - `analytics.rs` — Pure derived-metric computation
//! - `client.rs` — Sub-client with HTTP methods

pub mod quotes;
