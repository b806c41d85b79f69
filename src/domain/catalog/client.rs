//! Catalog sub-client — one-time load, autocomplete reads.

use crate::client::PricewatchClient;
use crate::domain::catalog::SymbolCatalog;
use crate::shared::Symbol;

/// Sub-client for symbol catalog operations.
pub struct Catalog<'a> {
    pub(crate) client: &'a PricewatchClient,
}

impl Catalog<'_> {
    /// Ensure the catalog is loaded, and return it.
    ///
    /// The first call fetches `GET /api/list/name` once; later calls return
    /// whatever that load produced. A failed load is non-fatal and not
    /// retried: the failure is logged and the catalog stays empty, which
    /// silently degrades autocomplete to "no suggestions".
    pub async fn load(&self) -> SymbolCatalog {
        if let Some(catalog) = self.client.catalog.read().await.clone() {
            return catalog;
        }

        let catalog = match self.client.http.list_symbols().await {
            Ok(entries) => {
                let symbols: Vec<Symbol> = entries.into_iter().map(|e| e.symbol).collect();
                tracing::debug!(count = symbols.len(), "symbol catalog loaded");
                SymbolCatalog::from_symbols(symbols)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load symbol catalog; autocomplete disabled");
                SymbolCatalog::new()
            }
        };

        let mut slot = self.client.catalog.write().await;
        // If another task initialized the slot while we were fetching, the
        // first initialization wins.
        slot.get_or_insert(catalog).clone()
    }

    /// The loaded catalog, or `None` before `load` has run.
    pub async fn get(&self) -> Option<SymbolCatalog> {
        self.client.catalog.read().await.clone()
    }

    /// Autocomplete against the loaded catalog. Empty until `load` has run.
    pub async fn suggestions(&self, prefix: &str) -> Vec<Symbol> {
        self.client
            .catalog
            .read()
            .await
            .as_ref()
            .map(|c| c.suggestions(prefix))
            .unwrap_or_default()
    }
}
