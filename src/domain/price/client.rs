//! Prices sub-client — latest price, 24h history, and the full fetch cycle.

use crate::client::PricewatchClient;
use crate::domain::price::{window_24h, PriceSample, ViewState};
use crate::error::{FetchError, SdkError};
use crate::shared::Symbol;

use chrono::Utc;
use rust_decimal::Decimal;

/// Envelope fallback when the latest-price endpoint fails without a message.
const LATEST_FALLBACK: &str = "Failed to fetch current price";
/// Envelope fallback when the interval endpoint fails without a message.
const HISTORY_FALLBACK: &str = "Failed to fetch price history";

/// Hours of history requested from the interval endpoint.
const HISTORY_INTERVAL_HOURS: u32 = 24;

/// Sub-client for price operations.
pub struct Prices<'a> {
    pub(crate) client: &'a PricewatchClient,
}

impl Prices<'_> {
    /// Latest price for `symbol` against the configured currency.
    ///
    /// `Ok(None)` means the backend answered but has no price for the pair.
    pub async fn latest(&self, symbol: &Symbol) -> Result<Option<Decimal>, SdkError> {
        if symbol.is_empty() {
            return Err(SdkError::Validation("symbol is empty".to_string()));
        }
        let wire = self
            .client
            .http
            .latest_price(symbol, self.client.currency())
            .await?;
        Ok(wire.and_then(|w| w.price))
    }

    /// Price history for `symbol`, windowed to the trailing 24 hours and
    /// sorted ascending by timestamp.
    pub async fn history_24h(&self, symbol: &Symbol) -> Result<Vec<PriceSample>, SdkError> {
        if symbol.is_empty() {
            return Err(SdkError::Validation("symbol is empty".to_string()));
        }
        let wires = self
            .client
            .http
            .price_interval(symbol, self.client.currency(), HISTORY_INTERVAL_HOURS)
            .await?;
        let samples = wires.into_iter().filter_map(PriceSample::from_wire).collect();
        let mut windowed = window_24h(samples, Utc::now());
        windowed.sort_by_key(|s| s.timestamp);
        Ok(windowed)
    }

    /// One full fetch cycle: both endpoints concurrently, failure in either
    /// aborting the whole cycle (no partial success).
    ///
    /// Never returns `Err` — all failures are classified into the returned
    /// `ViewState`'s error field.
    pub async fn snapshot(&self, symbol: &Symbol) -> ViewState {
        let http = &self.client.http;
        let currency = self.client.currency();

        let (latest, history) = tokio::join!(
            http.latest_price(symbol, currency),
            http.price_interval(symbol, currency, HISTORY_INTERVAL_HOURS),
        );

        let latest = match latest {
            Ok(wire) => wire,
            Err(err) => return ViewState::failed(FetchError::classify(&err, LATEST_FALLBACK)),
        };
        let history = match history {
            Ok(wires) => wires,
            Err(err) => return ViewState::failed(FetchError::classify(&err, HISTORY_FALLBACK)),
        };

        let current_price = latest.and_then(|w| w.price);
        let samples = history.into_iter().filter_map(PriceSample::from_wire).collect();
        ViewState::ready(current_price, window_24h(samples, Utc::now()))
    }
}
