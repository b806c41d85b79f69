//! Wire types for the price endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A price record as the backend serializes it.
///
/// Every field is optional on the wire: the backend omits empty fields, and
/// the latest-price payload is not guaranteed to carry more than `price`.
/// The canonical name for the numeric price is `price`; `latest_price` is
/// accepted as an alias because one client variant of the backend contract
/// used that spelling.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceSampleWire {
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default, alias = "latest_price")]
    pub price: Option<Decimal>,
}
