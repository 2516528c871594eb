//! Network URL constants for the Stockboard SDK.

/// Default REST API base URL (local data service).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
