//! The per-symbol view state — one renderable snapshot per fetch cycle.

use super::PriceSample;
use crate::error::FetchError;
use rust_decimal::Decimal;

/// The complete renderable snapshot for one tracked symbol.
///
/// Replaced wholesale on every fetch cycle, never patched in place.
/// Invariants:
/// - `price_history` is sorted ascending by timestamp.
/// - `current_price` and `price_history` are cleared together whenever
///   `error` is set; stale data is never shown next to an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub current_price: Option<Decimal>,
    pub price_history: Vec<PriceSample>,
    pub is_loading: bool,
    pub error: Option<FetchError>,
}

impl ViewState {
    /// The state before any symbol is tracked.
    pub fn idle() -> Self {
        Self::default()
    }

    /// The cycle-start snapshot: previous data kept visible, loading flag
    /// on, previous error cleared.
    pub fn loading_from(prev: &ViewState) -> Self {
        Self {
            current_price: prev.current_price,
            price_history: prev.price_history.clone(),
            is_loading: true,
            error: None,
        }
    }

    /// A successful cycle commit. Sorts the history ascending by timestamp
    /// (stable) so the ordering invariant holds by construction.
    pub fn ready(current_price: Option<Decimal>, mut price_history: Vec<PriceSample>) -> Self {
        price_history.sort_by_key(|s| s.timestamp);
        Self {
            current_price,
            price_history,
            is_loading: false,
            error: None,
        }
    }

    /// A failed cycle commit: data cleared together with the error set.
    pub fn failed(error: FetchError) -> Self {
        Self {
            current_price: None,
            price_history: Vec::new(),
            is_loading: false,
            error: Some(error),
        }
    }

    /// Settled with data and no error.
    pub fn is_ready(&self) -> bool {
        !self.is_loading && self.error.is_none()
    }
}
