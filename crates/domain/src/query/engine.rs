//! The query engine.
//!
//! A query filters the store, orders the survivors by `(overlay rank, id)`
//! and cuts one page out of the result. Because the store is already in id
//! order, that sort reduces to a stable partition: overlay members in
//! overlay order, then everyone else in natural order. The engine walks the
//! collection once, counting every match for `total` and keeping only the
//! ones that fall inside the requested window.

use serde::Serialize;

use super::{Query, SearchTerm};
use crate::item::{Item, ItemId, ItemStore};
use crate::overlay::{OrderOverlay, OverlaySnapshot};
use crate::selection::SelectionSet;

// =============================================================================
// QueryResult
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    /// The requested page, at most `limit` items.
    pub items: Vec<Item>,

    /// Number of items matching the search, before pagination.
    pub total: u64,

    /// The whole selection, ascending, independent of page and search.
    pub selected_ids: Vec<ItemId>,

    pub has_more: bool,
}

// =============================================================================
// PageCollector
// =============================================================================

struct PageCollector {
    start: usize,
    end: usize,
    seen: usize,
    items: Vec<Item>,
}

impl PageCollector {
    fn new((start, end): (usize, usize)) -> Self {
        Self {
            start,
            end,
            seen: 0,
            items: Vec::with_capacity(end.saturating_sub(start).min(1024)),
        }
    }

    fn offer(&mut self, item: &Item) {
        if (self.start..self.end).contains(&self.seen) {
            self.items.push(item.clone());
        }
        self.seen += 1;
    }
}

// =============================================================================
// QueryEngine
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a ItemStore,
    selection: &'a SelectionSet,
    overlay: &'a OrderOverlay,
}

impl<'a> QueryEngine<'a> {
    #[must_use]
    pub const fn new(
        store: &'a ItemStore,
        selection: &'a SelectionSet,
        overlay: &'a OrderOverlay,
    ) -> Self {
        Self {
            store,
            selection,
            overlay,
        }
    }

    #[must_use]
    pub fn execute(&self, query: &Query) -> QueryResult {
        let overlay = self.overlay.snapshot();
        let (_, end) = query.page().window();
        let mut collector = PageCollector::new(query.page().window());

        match overlay.as_deref() {
            Some(snapshot) => self.collect_with_overlay(snapshot, query.search(), &mut collector),
            None => self.collect_natural(query.search(), &mut collector),
        }

        let total = collector.seen;

        QueryResult {
            items: collector.items,
            total: total as u64,
            selected_ids: self.selection.snapshot(),
            has_more: end < total,
        }
    }

    fn collect_natural(&self, search: &SearchTerm, collector: &mut PageCollector) {
        let mut id_buffer = String::new();

        for (item, key) in self.store.entries() {
            if search.matches(item, key, &mut id_buffer) {
                collector.offer(item);
            }
        }
    }

    fn collect_with_overlay(
        &self,
        snapshot: &OverlaySnapshot,
        search: &SearchTerm,
        collector: &mut PageCollector,
    ) {
        let mut id_buffer = String::new();

        // Overlay ids that are not in the store have nothing to render.
        for id in snapshot.order() {
            if let Some((item, key)) = self.store.entry(*id)
                && search.matches(item, key, &mut id_buffer)
            {
                collector.offer(item);
            }
        }

        for (item, key) in self.store.entries() {
            if !snapshot.contains(item.id) && search.matches(item, key, &mut id_buffer) {
                collector.offer(item);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
