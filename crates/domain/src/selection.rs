//! Process-wide selection state.
//!
//! Selection is global: it is not scoped to a page or a search term, and
//! every query result carries the whole set. Ids are accepted without being
//! checked against the store.

use std::collections::BTreeSet;

use parking_lot::RwLock;

use crate::item::ItemId;

// =============================================================================
// SelectionSet
// =============================================================================

/// Set of selected item ids.
///
/// Writers serialize on the lock; concurrent selects and deselects resolve
/// as last-write-wins. Membership is kept ordered so snapshots are
/// deterministic without a separate sort.
#[derive(Debug, Default)]
pub struct SelectionSet {
    selected: RwLock<BTreeSet<ItemId>>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or removes `id`. Repeating the same call is a no-op.
    pub fn set_selected(&self, id: ItemId, selected: bool) {
        let changed = {
            let mut guard = self.selected.write();
            if selected {
                guard.insert(id)
            } else {
                guard.remove(&id)
            }
        };

        tracing::debug!(%id, selected, changed, "Selection updated");
    }

    #[must_use]
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected.read().contains(&id)
    }

    /// Current membership in ascending id order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ItemId> {
        self.selected.read().iter().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.read().is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
