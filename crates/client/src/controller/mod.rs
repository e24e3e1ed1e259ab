//! Infinite-scroll view controller.
//!
//! The controller owns an append-only window of items fetched page by page.
//! A search change or the initial mount replaces the window with page 1;
//! scrolling near the bottom appends the next page. Only one fetch is ever
//! in flight: triggers that arrive meanwhile are dropped, and a response
//! requested under an older search term is discarded on arrival.
//!
//! Selection toggles and drag-and-drop reorders apply locally first and are
//! then sent to the server once. A failed write is not rolled back; it is
//! returned as [`ClientError::UnsyncedEdit`].

mod drag;
mod fetch_slot;
mod scroll;
mod view;

pub use fetch_slot::{FetchGuard, FetchSlot};
pub use scroll::ScrollMetrics;
pub use view::ViewSummary;

use item_browser_domain::{Item, ItemId};
use parking_lot::Mutex;

use crate::config::ClientConfig;
use crate::errors::{ClientError, UnsyncedEdit};
use crate::transport::{ItemsTransport, PageQuery};
use view::ViewState;

// =============================================================================
// Outcomes
// =============================================================================

/// What a fetch trigger ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A page arrived and was merged into the window.
    Applied(ViewSummary),

    /// Another fetch was in flight; this trigger was dropped.
    Busy,

    /// The window already holds the last page.
    Exhausted,

    /// The scroll position was not close enough to the bottom.
    NotNearBottom,

    /// The response belonged to a search term that has since changed.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Reordered,

    /// No drag in progress, no target, the target was the dragged item
    /// itself, or one of them is no longer loaded.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchMode {
    Reset,
    Next,
}

// =============================================================================
// ViewController
// =============================================================================

pub struct ViewController<T> {
    transport: T,
    config: ClientConfig,
    state: Mutex<ViewState>,
    slot: FetchSlot,
}

impl<T: ItemsTransport> ViewController<T> {
    #[must_use]
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self {
            transport,
            config,
            state: Mutex::new(ViewState::default()),
            slot: FetchSlot::new(),
        }
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    /// Loads page 1 for the current search term.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Fetch`] if the page could not be loaded.
    pub async fn mount(&self) -> Result<FetchOutcome, ClientError> {
        self.fetch(FetchMode::Reset).await
    }

    /// Reloads page 1 for the current search term.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Fetch`] if the page could not be loaded.
    pub async fn refresh(&self) -> Result<FetchOutcome, ClientError> {
        self.fetch(FetchMode::Reset).await
    }

    /// Switches the search term and loads its first page.
    ///
    /// The new term is recorded even if the fetch is dropped as busy; the
    /// next trigger then starts over from page 1.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Fetch`] if the page could not be loaded.
    pub async fn set_search(
        &self,
        term: impl Into<String>,
    ) -> Result<FetchOutcome, ClientError> {
        {
            let mut state = self.state.lock();
            state.search = term.into();
            state.generation += 1;
        }
        self.fetch(FetchMode::Reset).await
    }

    /// Appends the next page.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Fetch`] if the page could not be loaded.
    pub async fn load_more(&self) -> Result<FetchOutcome, ClientError> {
        self.fetch(FetchMode::Next).await
    }

    /// Appends the next page if `metrics` is within the configured
    /// threshold of the bottom.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Fetch`] if the page could not be loaded.
    pub async fn on_scroll(&self, metrics: ScrollMetrics) -> Result<FetchOutcome, ClientError> {
        if !metrics.is_near_bottom(self.config.scroll_threshold_px) {
            return Ok(FetchOutcome::NotNearBottom);
        }
        self.fetch(FetchMode::Next).await
    }

    async fn fetch(&self, mode: FetchMode) -> Result<FetchOutcome, ClientError> {
        let Some(_guard) = self.slot.try_acquire() else {
            tracing::debug!(?mode, "Fetch already in flight, dropping trigger");
            return Ok(FetchOutcome::Busy);
        };

        let (query, generation, reset) = {
            let state = self.state.lock();
            // A window loaded for an older term cannot be extended.
            let reset = mode == FetchMode::Reset || !state.is_current();
            if !reset && !state.has_more {
                return Ok(FetchOutcome::Exhausted);
            }

            let query = PageQuery {
                page: if reset { 1 } else { state.next_page },
                limit: self.config.page_size,
                search: state.search.clone(),
            };
            (query, state.generation, reset)
        };

        let requested = query.page;
        let search = query.search.clone();

        let page = match self.transport.fetch_page(query).await {
            Ok(page) => page,
            Err(error) => {
                tracing::warn!(%error, page = requested, search = %search, "Page fetch failed");
                return Err(ClientError::Fetch(error));
            }
        };

        let mut state = self.state.lock();
        if state.generation != generation {
            tracing::debug!(
                page = requested,
                search = %search,
                "Discarding page for outdated search"
            );
            return Ok(FetchOutcome::Stale);
        }

        state.apply_page(page, requested, reset, search);
        Ok(FetchOutcome::Applied(state.summary(false)))
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Flips the local selection of `id` and tells the server.
    ///
    /// Returns the new local state.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnsyncedEdit`] if the server was not updated.
    /// The local toggle stays in place.
    pub async fn toggle_selection(&self, id: ItemId) -> Result<bool, ClientError> {
        let selected = {
            let mut state = self.state.lock();
            let selected = !state.selected.contains(&id);
            if selected {
                state.selected.insert(id);
            } else {
                state.selected.remove(&id);
            }
            selected
        };

        self.transport
            .set_selected(id, selected)
            .await
            .map_err(|source| {
                tracing::warn!(error = %source, %id, selected, "Selection change not saved");
                ClientError::UnsyncedEdit {
                    edit: UnsyncedEdit::Selection { id, selected },
                    source,
                }
            })?;

        Ok(selected)
    }

    // =========================================================================
    // Drag and Drop
    // =========================================================================

    /// Starts dragging `id`. Returns false if it is not loaded.
    pub fn begin_drag(&self, id: ItemId) -> bool {
        let mut state = self.state.lock();
        if !state.items.iter().any(|item| item.id == id) {
            return false;
        }
        state.drag.begin(id);
        true
    }

    /// Marks `id` as the current drop target. Returns false if nothing is
    /// being dragged or `id` is the dragged item.
    pub fn drag_over(&self, id: ItemId) -> bool {
        self.state.lock().drag.hover(id)
    }

    /// Abandons the gesture without reordering.
    pub fn end_drag(&self) {
        self.state.lock().drag.end();
    }

    #[must_use]
    pub fn dragged_item(&self) -> Option<ItemId> {
        self.state.lock().drag.dragged()
    }

    #[must_use]
    pub fn drag_target(&self) -> Option<ItemId> {
        self.state.lock().drag.target()
    }

    /// Completes the gesture: moves the dragged item to the target's
    /// position and sends the first page of the new local order as the
    /// server's custom order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnsyncedEdit`] if the server was not updated.
    /// The local order stays rearranged.
    pub async fn drop_item(&self) -> Result<DropOutcome, ClientError> {
        let overlay: Vec<ItemId> = {
            let mut state = self.state.lock();
            let Some((dragged, target)) = state.drag.finish() else {
                return Ok(DropOutcome::Ignored);
            };
            if !drag::move_onto(&mut state.items, dragged, target) {
                return Ok(DropOutcome::Ignored);
            }

            let head = usize::try_from(self.config.page_size).unwrap_or(usize::MAX);
            state.items.iter().take(head).map(|item| item.id).collect()
        };

        tracing::debug!(length = overlay.len(), "Sending custom order");

        if let Err(source) = self.transport.reorder(overlay.clone()).await {
            tracing::warn!(error = %source, "Custom order not saved");
            return Err(ClientError::UnsyncedEdit {
                edit: UnsyncedEdit::Reorder { ids: overlay },
                source,
            });
        }

        Ok(DropOutcome::Reordered)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        self.state.lock().items.clone()
    }

    #[must_use]
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.state.lock().items.iter().map(|item| item.id).collect()
    }

    #[must_use]
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.state.lock().selected.contains(&id)
    }

    /// Locally known selection, ascending.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.state.lock().selected.iter().copied().collect()
    }

    #[must_use]
    pub fn search(&self) -> String {
        self.state.lock().search.clone()
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.slot.is_busy()
    }

    #[must_use]
    pub fn summary(&self) -> ViewSummary {
        self.state.lock().summary(self.slot.is_busy())
    }
}

// =============================================================================
// Tests
// =============================================================================
