//! Item catalog: item types and the in-memory store.

pub mod store;
pub mod types;

pub use store::ItemStore;
pub use types::{Item, ItemDraft};
