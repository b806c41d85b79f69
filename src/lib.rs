//! # Pricewatch SDK
//!
//! A Rust client SDK for the Pricewatch crypto price tracker backend.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, windowing logic
//! 2. **HTTP API** — `PricewatchHttp`, envelope-aware, one method per endpoint
//! 3. **High-Level Client** — `PricewatchClient` with nested sub-clients and
//!    the once-loaded symbol catalog
//! 4. **Watcher** — `PriceWatcher`, the polling subscription for one symbol
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pricewatch_sdk::prelude::*;
//!
//! let client = PricewatchClient::builder()
//!     .base_url("http://localhost:8080")
//!     .build()?;
//!
//! let catalog = client.catalog().load().await;
//! println!("{:?}", catalog.suggestions("BT"));
//!
//! let mut watcher = client.watch(Symbol::new("BTC"));
//! let states = watcher.states();
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and currency constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per backend endpoint.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `PricewatchClient` — the primary entry point.
pub mod client;

// ── Layer 4: Watcher ─────────────────────────────────────────────────────────

/// Polling price watcher: periodic fetch cycles, symbol switching,
/// stale-commit suppression.
pub mod watch;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::Symbol;

    // Domain types — catalog
    pub use crate::domain::catalog::SymbolCatalog;

    // Domain types — price
    pub use crate::domain::price::{window_24h, PriceSample, ViewState};

    // Errors
    pub use crate::error::{FetchError, FetchErrorKind, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_CURRENCY};

    // Client + sub-clients
    pub use crate::client::{PricewatchClient, PricewatchClientBuilder};
    pub use crate::domain::catalog::client::Catalog;
    pub use crate::domain::price::client::Prices;

    // Watcher
    pub use crate::watch::{PriceWatcher, DEFAULT_POLL_INTERVAL};
}
