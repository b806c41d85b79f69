//! Network constants for the Pricewatch SDK.

/// Default REST API base URL. The backend serves everything under `/api`.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Default quote currency for price queries.
pub const DEFAULT_CURRENCY: &str = "USDT";
