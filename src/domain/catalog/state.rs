//! Symbol catalog container — loaded once, read-only thereafter.

use crate::shared::Symbol;

/// The set of valid ticker symbols, in backend order.
///
/// Loaded once at client startup (see `Catalog::load`) and never refreshed.
/// All reads are pure functions over the loaded list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
}

impl SymbolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Every catalog entry starting with `prefix`, case-insensitively,
    /// in catalog order. An empty or whitespace prefix yields nothing
    /// (the dropdown stays closed).
    ///
    /// Total and side-effect-free; safe to call on every keystroke.
    pub fn suggestions(&self, prefix: &str) -> Vec<Symbol> {
        let prefix = prefix.trim().to_uppercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        self.symbols
            .iter()
            .filter(|s| s.as_str().starts_with(&prefix))
            .cloned()
            .collect()
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
