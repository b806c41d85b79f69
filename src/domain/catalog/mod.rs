//! Symbol catalog domain — valid ticker symbols and autocomplete.

pub mod client;
pub mod state;
pub mod wire;

pub use state::SymbolCatalog;
