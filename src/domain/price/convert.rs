//! Conversions from wire types to domain types for prices.

use super::wire::PriceSampleWire;
use super::PriceSample;
use crate::shared::Symbol;

impl PriceSample {
    /// Wire → domain. A record without a timestamp carries no chartable
    /// point and is dropped (the interval endpoint always sets one; the
    /// latest-price payload is consumed field-wise instead).
    pub(crate) fn from_wire(wire: PriceSampleWire) -> Option<Self> {
        let timestamp = wire.timestamp?;
        Some(Self {
            timestamp,
            symbol: Symbol::new(wire.symbol),
            currency: wire.currency,
            price: wire.price.unwrap_or_default(),
        })
    }
}
