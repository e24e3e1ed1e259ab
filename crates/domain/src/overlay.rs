//! Custom ordering override.
//!
//! The overlay is a partial order refinement on top of natural order: its
//! members come first, in overlay order, and every other item follows in
//! ascending id order. It is replaced wholesale on each reorder commit and
//! published as an immutable snapshot, so a query always ranks against one
//! consistent overlay even while a reorder lands concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::item::ItemId;

// =============================================================================
// OverlayRank
// =============================================================================

/// Position of an item under the overlay.
///
/// The derived ordering places every `Placed` rank before `Unplaced`, which
/// is the "after all overlay members" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OverlayRank {
    Placed(usize),
    Unplaced,
}

// =============================================================================
// OverlaySnapshot
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlaySnapshot {
    order: Vec<ItemId>,
    ranks: HashMap<ItemId, usize>,
}

impl OverlaySnapshot {
    /// Builds a snapshot from an ordered id sequence.
    ///
    /// Returns `None` for an empty sequence, which means "no overlay". When an
    /// id repeats, its last occurrence decides the rank.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = ItemId>) -> Option<Self> {
        let mut last_seen = HashMap::new();
        for (index, id) in ids.into_iter().enumerate() {
            last_seen.insert(id, index);
        }

        let mut order: Vec<ItemId> = last_seen.keys().copied().collect();
        order.sort_unstable_by_key(|id| last_seen[id]);

        let ranks: HashMap<ItemId, usize> = order
            .iter()
            .enumerate()
            .map(|(rank, id)| (*id, rank))
            .collect();

        if order.is_empty() {
            None
        } else {
            Some(Self { order, ranks })
        }
    }

    #[must_use]
    pub fn rank(&self, id: ItemId) -> OverlayRank {
        self.ranks
            .get(&id)
            .map_or(OverlayRank::Unplaced, |position| OverlayRank::Placed(*position))
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.ranks.contains_key(&id)
    }

    /// Member ids in overlay order.
    #[must_use]
    pub fn order(&self) -> &[ItemId] {
        &self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// =============================================================================
// OrderOverlay
// =============================================================================

#[derive(Debug)]
pub struct OrderOverlay {
    current: ArcSwapOption<OverlaySnapshot>,
}

impl Default for OrderOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }

    /// Replaces the overlay. An empty sequence clears it.
    pub fn set_overlay(&self, ids: impl IntoIterator<Item = ItemId>) {
        let snapshot = OverlaySnapshot::from_ids(ids);

        match &snapshot {
            Some(snapshot) => tracing::debug!(members = snapshot.len(), "Order overlay replaced"),
            None => tracing::debug!("Order overlay cleared"),
        }

        self.current.store(snapshot.map(Arc::new));
    }

    pub fn clear(&self) {
        self.set_overlay(std::iter::empty());
    }

    /// The overlay in effect right now, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<OverlaySnapshot>> {
        self.current.load_full()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.load().is_some()
    }

    #[must_use]
    pub fn rank(&self, id: ItemId) -> OverlayRank {
        self.current
            .load()
            .as_ref()
            .map_or(OverlayRank::Unplaced, |snapshot| snapshot.rank(id))
    }
}

// =============================================================================
// Tests
// =============================================================================
