//! Low-level HTTP client — `PricewatchHttp`.
//!
//! One method per API endpoint. Returns wire types; the envelope is unwrapped
//! here so domain clients only ever see typed payloads or typed errors.

use crate::domain::catalog::wire::SymbolEntry;
use crate::domain::price::wire::PriceSampleWire;
use crate::error::HttpError;
use crate::http::envelope::Envelope;
use crate::shared::Symbol;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the Pricewatch REST API.
#[derive(Clone)]
pub struct PricewatchHttp {
    base_url: String,
    client: Client,
}

impl PricewatchHttp {
    pub fn new(base_url: &str) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Symbol catalog ───────────────────────────────────────────────────

    pub async fn list_symbols(&self) -> Result<Vec<SymbolEntry>, HttpError> {
        let url = format!("{}/api/list/name", self.base_url);
        Ok(self.get_enveloped(&url).await?.unwrap_or_default())
    }

    // ── Prices ───────────────────────────────────────────────────────────

    pub async fn latest_price(
        &self,
        symbol: &Symbol,
        currency: &str,
    ) -> Result<Option<PriceSampleWire>, HttpError> {
        let url = format!(
            "{}/api/price/latest?symbol={}&currency={}",
            self.base_url,
            urlencoding::encode(symbol.as_str()),
            urlencoding::encode(currency)
        );
        self.get_enveloped(&url).await
    }

    pub async fn price_interval(
        &self,
        symbol: &Symbol,
        currency: &str,
        interval_hours: u32,
    ) -> Result<Vec<PriceSampleWire>, HttpError> {
        let url = format!(
            "{}/api/price/interval?symbol={}&currency={}&interval={}",
            self.base_url,
            urlencoding::encode(symbol.as_str()),
            urlencoding::encode(currency),
            interval_hours
        );
        let data: Option<serde_json::Value> = self.get_enveloped(&url).await?;
        match data {
            // A non-array payload degrades to "no history" rather than failing
            // the cycle.
            Some(value @ serde_json::Value::Array(_)) => Ok(serde_json::from_value(value)?),
            _ => Ok(Vec::new()),
        }
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    /// GET `url`, unwrap the response envelope, and return its payload.
    ///
    /// A 2xx response with `meta.code != 200` becomes `HttpError::Envelope`.
    /// A non-2xx response becomes `HttpError::Status`, preserving the
    /// server's own envelope message when the error body carries one.
    async fn get_enveloped<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|env| env.meta.message().map(str::to_string));
            return Err(HttpError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope = resp.json::<Envelope<T>>().await?;
        if envelope.meta.code != 200 {
            return Err(HttpError::Envelope {
                code: envelope.meta.code,
                message: envelope.meta.message().map(str::to_string),
            });
        }
        Ok(envelope.data)
    }
}
