//! HTTP layer — envelope-aware client for the Pricewatch REST API.

pub mod client;
pub mod envelope;

pub use client::PricewatchHttp;
pub use envelope::{Envelope, Meta};
