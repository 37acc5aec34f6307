//! In-memory ordered item store.
//!
//! The store owns its collection and id counter; callers share it as
//! `Arc<ItemStore>`. Every mutation holds the write lock for its whole
//! duration, every read clones a snapshot under the read lock.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::error::{StoreError, StoreResult};
use crate::id::ItemId;
use crate::item::{Item, ItemPatch, NewItem};
use crate::stats::ItemStats;

#[derive(Debug)]
struct Inner {
    items: Vec<Item>,
    next_id: ItemId,
}

/// Index of the item with `id`, scanning in order.
fn position_of(items: &[Item], id: ItemId) -> Option<usize> {
    items.iter().position(|i| i.id == id)
}

#[derive(Debug)]
pub struct ItemStore {
    inner: RwLock<Inner>,
}

impl ItemStore {
    /// An empty store; the first created item gets id 1.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// A store holding `items` in the given order.
    ///
    /// The id counter starts past the largest seeded id, so later creates
    /// never collide with seed data.
    pub fn with_items(items: Vec<Item>) -> Self {
        let next_id = items
            .iter()
            .map(|i| i.id)
            .max()
            .map(|max| max.next())
            .unwrap_or(ItemId::FIRST);

        Self {
            inner: RwLock::new(Inner { items, next_id }),
        }
    }

    /// The demo data set the service starts with.
    pub fn sample() -> Self {
        let seed = [
            ("Hackathon Item 1", "First amazing feature", 100.0),
            ("Hackathon Item 2", "Second innovative solution", 250.0),
            ("Hackathon Item 3", "Third game-changing idea", 175.0),
            ("Hackathon Item 4", "Fourth breakthrough concept", 300.0),
        ];

        let items = seed
            .into_iter()
            .zip(1u64..)
            .map(|((name, description, value), id)| Item {
                id: ItemId::new(id),
                name: name.to_string(),
                description: description.to_string(),
                value,
            })
            .collect();

        Self::with_items(items)
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| StoreError::internal("item store lock poisoned"))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| StoreError::internal("item store lock poisoned"))
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.items.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// All items in insertion order.
    pub fn list(&self) -> StoreResult<Vec<Item>> {
        Ok(self.read()?.items.clone())
    }

    pub fn get(&self, id: ItemId) -> StoreResult<Item> {
        let inner = self.read()?;
        position_of(&inner.items, id)
            .map(|index| inner.items[index].clone())
            .ok_or(StoreError::not_found(id))
    }

    /// Validate, assign the next id, and append.
    pub fn create(&self, input: NewItem) -> StoreResult<Item> {
        let mut inner = self.write()?;
        let item = input.into_item(inner.next_id)?;

        inner.next_id = inner.next_id.next();
        inner.items.push(item.clone());

        tracing::debug!(item_id = %item.id, "item appended");
        Ok(item)
    }

    pub fn update(&self, id: ItemId, patch: ItemPatch) -> StoreResult<Item> {
        let mut inner = self.write()?;
        let index = position_of(&inner.items, id).ok_or(StoreError::not_found(id))?;

        let item = &mut inner.items[index];
        item.apply(patch)?;
        Ok(item.clone())
    }

    /// Remove and return the item; the relative order of the rest is kept.
    pub fn delete(&self, id: ItemId) -> StoreResult<Item> {
        let mut inner = self.write()?;
        let index = position_of(&inner.items, id).ok_or(StoreError::not_found(id))?;

        Ok(inner.items.remove(index))
    }

    /// Case-insensitive substring search over name and description.
    ///
    /// A missing or empty query returns the full list.
    pub fn search(&self, query: Option<&str>) -> StoreResult<Vec<Item>> {
        let needle = match query {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return self.list(),
        };

        Ok(self
            .read()?
            .items
            .iter()
            .filter(|i| i.matches_lowercase(&needle))
            .cloned()
            .collect())
    }

    pub fn stats(&self, generated_at: DateTime<Utc>) -> StoreResult<ItemStats> {
        let inner = self.read()?;
        Ok(ItemStats::compute(&inner.items, generated_at))
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
