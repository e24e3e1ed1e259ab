//! The immutable base collection.
//!
//! The store keeps items in ascending id order, which is the natural order
//! every query falls back to. A lowercase copy of each item's `value` is
//! built once at construction so case-insensitive search never has to
//! allocate per item per request.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use super::{Item, ItemId};

/// Upper bound (exclusive) of the generated `random` attribute.
const RANDOM_UPPER_BOUND: u32 = 1000;

// =============================================================================
// StoreError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("item ids must be strictly ascending: {next} follows {previous}")]
    NotAscending { previous: ItemId, next: ItemId },
}

// =============================================================================
// ItemStore
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    search_keys: Vec<String>,
}

impl ItemStore {
    /// Builds a store from an externally supplied dataset.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotAscending`] when ids are not strictly
    /// ascending, since natural order and id lookup both depend on it.
    pub fn from_items(items: Vec<Item>) -> Result<Self, StoreError> {
        if let Some(pair) = items.windows(2).find(|pair| pair[0].id >= pair[1].id) {
            return Err(StoreError::NotAscending {
                previous: pair[0].id,
                next: pair[1].id,
            });
        }

        let search_keys = items.iter().map(|item| item.value.to_lowercase()).collect();

        Ok(Self { items, search_keys })
    }

    /// Generates the default dataset: ids `1..=count`, `"Item {id}"` values and
    /// a `random` attribute drawn from a generator seeded with `seed`.
    ///
    /// The same `(count, seed)` pair always yields the same collection.
    #[must_use]
    pub fn generate(count: u64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let items: Vec<Item> = (1..=count)
            .map(|id| {
                Item::new(
                    ItemId::new(id),
                    format!("Item {id}"),
                    format!("Additional info for item {id}"),
                    f64::from(rng.random_range(0..RANDOM_UPPER_BOUND)),
                )
            })
            .collect();
        let search_keys = items.iter().map(|item| item.value.to_lowercase()).collect();

        tracing::debug!(count, seed, "Generated item collection");

        Self { items, search_keys }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by id.
    ///
    /// Dense `1..=N` collections resolve by direct index; anything else falls
    /// back to a binary search over the ascending ids.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.position(id).map(|index| &self.items[index])
    }

    /// Iterates items in natural (ascending id) order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Iterates items together with their lowercase search key.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&Item, &str)> {
        self.items
            .iter()
            .zip(self.search_keys.iter().map(String::as_str))
    }

    /// Returns the item and its lowercase search key for `id`.
    pub(crate) fn entry(&self, id: ItemId) -> Option<(&Item, &str)> {
        self.position(id)
            .map(|index| (&self.items[index], self.search_keys[index].as_str()))
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        let dense_index = usize::try_from(id.value())
            .ok()
            .and_then(|value| value.checked_sub(1));

        if let Some(index) = dense_index
            && self.items.get(index).is_some_and(|item| item.id == id)
        {
            return Some(index);
        }

        self.items.binary_search_by_key(&id, |item| item.id).ok()
    }
}

// =============================================================================
// Tests
// =============================================================================
