//! Price domain — latest price, 24h history, and the per-symbol view state.

pub mod client;
mod convert;
pub mod state;
pub mod window;
pub mod wire;

use crate::shared::Symbol;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::ViewState;
pub use window::window_24h;

/// One observed price point. Immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceSample {
    pub timestamp: DateTime<Utc>,
    pub symbol: Symbol,
    pub currency: String,
    pub price: Decimal,
}
