//! History windowing — trailing 24h filter over price samples.

use super::PriceSample;
use chrono::{DateTime, Duration, Utc};

/// Keep each sample iff `now - 24h <= timestamp <= now`.
///
/// Input order is not assumed and is preserved (the filter is stable);
/// sorting is the caller's concern. Idempotent for a fixed `now`.
pub fn window_24h(samples: Vec<PriceSample>, now: DateTime<Utc>) -> Vec<PriceSample> {
    let cutoff = now - Duration::hours(24);
    samples
        .into_iter()
        .filter(|s| s.timestamp >= cutoff && s.timestamp <= now)
        .collect()
}
