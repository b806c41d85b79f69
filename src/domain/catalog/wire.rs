//! Wire types for the symbol catalog endpoint.

use crate::shared::Symbol;
use serde::Deserialize;

/// One record from `GET /api/list/name`. Only `symbol` is consumed; the
/// backend sends additional descriptive fields we ignore.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolEntry {
    pub symbol: Symbol,
}
