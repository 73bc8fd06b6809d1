//! In-memory item store.
//!
//! The store owns the item collection and the next-id counter behind a
//! single [`RwLock`]. Reads share the lock; create, update and delete take
//! it exclusively so id assignment and find-then-modify sequences cannot
//! interleave.

use rust_decimal_macros::dec;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::types::{Item, ItemDraft};
use crate::error::ValidationError;
use crate::metrics;

/// First id handed out by a fresh store.
pub const FIRST_ID: u64 = 1;

#[derive(Debug)]
struct Inner {
    items: Vec<Item>,
    next_id: u64,
}

/// Authoritative holder of all catalog items.
#[derive(Debug)]
pub struct ItemStore {
    inner: RwLock<Inner>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                items: Vec::new(),
                next_id: FIRST_ID,
            }),
        }
    }

    /// Create a store seeded with the sample catalog.
    pub fn with_sample_data() -> Self {
        let items = vec![
            Item {
                id: 1,
                name: "Laptop".to_string(),
                description: "High-performance laptop for work and gaming".to_string(),
                price: dec!(999.99),
                category: "Electronics".to_string(),
                quantity: 50,
            },
            Item {
                id: 2,
                name: "Coffee Mug".to_string(),
                description: "Ceramic coffee mug with handle".to_string(),
                price: dec!(12.99),
                category: "Kitchen".to_string(),
                quantity: 200,
            },
            Item {
                id: 3,
                name: "Wireless Mouse".to_string(),
                description: "Ergonomic wireless mouse with USB receiver".to_string(),
                price: dec!(29.99),
                category: "Electronics".to_string(),
                quantity: 75,
            },
        ];
        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;

        Self {
            inner: RwLock::new(Inner { items, next_id }),
        }
    }

    /// Snapshot of all items in insertion order.
    pub async fn list(&self) -> Vec<Item> {
        self.inner.read().await.items.clone()
    }

    /// Look up an item by id.
    pub async fn get(&self, id: u64) -> Option<Item> {
        let inner = self.inner.read().await;
        inner.items.iter().find(|item| item.id == id).cloned()
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    /// Whether the store holds no items.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.items.is_empty()
    }

    /// Validate a draft, assign it the next id and append it.
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: ItemDraft) -> Result<Item, ValidationError> {
        let mut inner = self.inner.write().await;

        let item = draft.into_item(inner.next_id).map_err(|e| {
            warn!("Rejected new item: {}", e);
            metrics::inc_validation_failures();
            e
        })?;
        inner.next_id += 1;
        inner.items.push(item.clone());

        info!(id = item.id, name = %item.name, "Item created");
        metrics::inc_items_created();
        Ok(item)
    }

    /// Replace every field but the id of an existing item.
    ///
    /// Validation happens before the lock is taken, so an invalid draft
    /// never touches the collection. Returns `Ok(None)` when no item has
    /// the given id.
    #[instrument(skip(self, draft))]
    pub async fn update(&self, id: u64, draft: ItemDraft) -> Result<Option<Item>, ValidationError> {
        let updated = draft.into_item(id).map_err(|e| {
            warn!("Rejected update: {}", e);
            metrics::inc_validation_failures();
            e
        })?;

        let mut inner = self.inner.write().await;
        let Some(slot) = inner.items.iter_mut().find(|item| item.id == id) else {
            debug!("No item to update");
            return Ok(None);
        };
        *slot = updated.clone();

        info!("Item updated");
        metrics::inc_items_updated();
        Ok(Some(updated))
    }

    /// Remove an item. Returns whether anything was removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.items.len();
        inner.items.retain(|item| item.id != id);
        let removed = inner.items.len() != before;

        if removed {
            info!("Item deleted");
            metrics::inc_items_deleted();
        } else {
            debug!("No item to delete");
        }
        removed
    }

    /// Items whose category equals `category`, ignoring case.
    pub async fn filter_by_category(&self, category: &str) -> Vec<Item> {
        self.filter(|item| item.in_category(category)).await
    }

    /// Items whose name contains `needle`, ignoring case.
    pub async fn filter_by_name(&self, needle: &str) -> Vec<Item> {
        self.filter(|item| item.name_contains(needle)).await
    }

    async fn filter<F>(&self, predicate: F) -> Vec<Item>
    where
        F: Fn(&Item) -> bool,
    {
        let inner = self.inner.read().await;
        inner
            .items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
