//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — Conversions from wire to domain types
//! - `state.rs` — App-owned state containers
//! - `client.rs` — Sub-client with HTTP methods

pub mod catalog;
pub mod price;
