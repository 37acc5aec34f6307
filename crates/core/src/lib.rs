//! `itemstore-core` — the item domain and its in-memory store.
//!
//! This crate contains **pure domain** code (no HTTP, no process wiring).

pub mod error;
pub mod id;
pub mod item;
pub mod stats;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use id::ItemId;
pub use item::{Item, ItemPatch, NewItem};
pub use stats::ItemStats;
pub use store::ItemStore;
