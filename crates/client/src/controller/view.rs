use std::collections::BTreeSet;
use std::fmt;

use item_browser_domain::{Item, ItemId};

use super::drag::DragState;
use crate::transport::ItemsPage;

// =============================================================================
// ViewSummary
// =============================================================================

/// What a list footer needs to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSummary {
    /// Items currently held locally.
    pub loaded: usize,

    /// Server-side match count for the current search.
    pub total: u64,

    pub has_more: bool,

    /// A page fetch is in flight.
    pub loading: bool,
}

impl ViewSummary {
    /// True when the last page has arrived and nothing is loading.
    #[must_use]
    pub const fn is_end_of_list(&self) -> bool {
        !self.loading && !self.has_more
    }
}

impl fmt::Display for ViewSummary {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Showing {} of {} items", self.loaded, self.total)
    }
}

// =============================================================================
// ViewState
// =============================================================================

#[derive(Debug)]
pub(crate) struct ViewState {
    pub(crate) items: Vec<Item>,
    pub(crate) selected: BTreeSet<ItemId>,
    pub(crate) next_page: u64,
    pub(crate) has_more: bool,
    pub(crate) total: u64,

    /// The term the user asked for most recently.
    pub(crate) search: String,

    /// The term the loaded window was fetched with, if anything is loaded.
    pub(crate) loaded_search: Option<String>,

    /// Bumped on every search change; a response is applied only if the
    /// generation it was requested under is still current.
    pub(crate) generation: u64,

    pub(crate) drag: DragState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: BTreeSet::new(),
            next_page: 1,
            has_more: true,
            total: 0,
            search: String::new(),
            loaded_search: None,
            generation: 0,
            drag: DragState::default(),
        }
    }
}

impl ViewState {
    /// Whether the loaded window belongs to the current search term.
    pub(crate) fn is_current(&self) -> bool {
        self.loaded_search.as_deref() == Some(self.search.as_str())
    }

    pub(crate) fn apply_page(
        &mut self,
        page: ItemsPage,
        requested: u64,
        reset: bool,
        search: String,
    ) {
        if reset {
            self.items = page.items;
        } else {
            self.items.extend(page.items);
        }
        self.selected = page.selected_items.into_iter().collect();
        self.total = page.total;
        self.has_more = page.has_more;
        self.next_page = requested + 1;
        self.loaded_search = Some(search);
    }

    pub(crate) fn summary(&self, loading: bool) -> ViewSummary {
        ViewSummary {
            loaded: self.items.len(),
            total: self.total,
            has_more: self.has_more,
            loading,
        }
    }
}
