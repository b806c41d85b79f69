//! High-level client — `PricewatchClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared catalog state, and the
//! accessor methods.

use crate::domain::catalog::client::Catalog;
use crate::domain::catalog::SymbolCatalog;
use crate::domain::price::client::Prices;
use crate::error::SdkError;
use crate::http::PricewatchHttp;
use crate::shared::Symbol;
use crate::watch::{PriceWatcher, DEFAULT_POLL_INTERVAL};

use async_lock::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// The primary entry point for the Pricewatch SDK.
///
/// Provides nested sub-client accessors: `client.catalog()`,
/// `client.prices()`, and `client.watch(symbol)` for the polling
/// subscription.
#[derive(Clone)]
pub struct PricewatchClient {
    pub(crate) http: PricewatchHttp,
    /// Symbol catalog: initialized once by `Catalog::load`, read-only after.
    /// Shared across clones so every handle sees the same load.
    pub(crate) catalog: Arc<RwLock<Option<SymbolCatalog>>>,
    pub(crate) currency: String,
    pub(crate) poll_interval: Duration,
}

impl PricewatchClient {
    pub fn builder() -> PricewatchClientBuilder {
        PricewatchClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn catalog(&self) -> Catalog<'_> {
        Catalog { client: self }
    }

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    /// Start a polling subscription for `symbol`.
    ///
    /// The watcher owns a background task with its own clone of this
    /// client; its lifetime is managed by the caller (stop or drop it to
    /// cancel polling).
    pub fn watch(&self, symbol: Symbol) -> PriceWatcher {
        PriceWatcher::spawn(self.clone(), symbol)
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PricewatchClientBuilder {
    base_url: String,
    currency: String,
    poll_interval: Duration,
}

impl Default for PricewatchClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            currency: crate::network::DEFAULT_CURRENCY.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl PricewatchClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn currency(mut self, currency: &str) -> Self {
        self.currency = currency.to_string();
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn build(self) -> Result<PricewatchClient, SdkError> {
        if self.base_url.trim().is_empty() {
            return Err(SdkError::Validation("base_url is empty".to_string()));
        }
        if self.poll_interval.is_zero() {
            return Err(SdkError::Validation("poll_interval is zero".to_string()));
        }
        Ok(PricewatchClient {
            http: PricewatchHttp::new(&self.base_url),
            catalog: Arc::new(RwLock::new(None)),
            currency: self.currency,
            poll_interval: self.poll_interval,
        })
    }
}
