//! HTTP client layer — `StockboardHttp`, one method per endpoint.

pub mod client;

pub use client::StockboardHttp;
