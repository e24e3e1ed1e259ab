//! The shared browsing state, owned in one place.
//!
//! A `Catalog` is created once at startup and handed to whoever serves
//! requests. It owns the item store and the two mutable layers over it, and
//! exposes exactly the three operations the outside world needs.

use std::sync::Arc;

use crate::item::{ItemId, ItemStore};
use crate::overlay::OrderOverlay;
use crate::query::{Query, QueryEngine, QueryResult};
use crate::selection::SelectionSet;

#[derive(Debug)]
pub struct Catalog {
    store: Arc<ItemStore>,
    selection: SelectionSet,
    overlay: OrderOverlay,
}

impl Catalog {
    #[must_use]
    pub fn new(store: ItemStore) -> Self {
        Self::from_arc(Arc::new(store))
    }

    #[must_use]
    pub fn from_arc(store: Arc<ItemStore>) -> Self {
        Self {
            store,
            selection: SelectionSet::new(),
            overlay: OrderOverlay::new(),
        }
    }

    #[must_use]
    pub fn query(&self, query: &Query) -> QueryResult {
        QueryEngine::new(&self.store, &self.selection, &self.overlay).execute(query)
    }

    pub fn set_selected(&self, id: ItemId, selected: bool) {
        self.selection.set_selected(id, selected);
    }

    pub fn set_overlay(&self, ids: impl IntoIterator<Item = ItemId>) {
        self.overlay.set_overlay(ids);
    }

    #[must_use]
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    #[must_use]
    pub const fn overlay(&self) -> &OrderOverlay {
        &self.overlay
    }
}
