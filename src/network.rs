//! Network constants for the order-management backend.

/// Default REST API base URL (local backend development server).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the base URL in the terminal front end.
pub const API_URL_ENV: &str = "ORDER_ENTRY_API_URL";
