//! The port the view controller talks through.
//!
//! Each method maps to one server endpoint. Implementations own their
//! arguments so the returned futures borrow nothing but the transport.

mod http;

pub use http::HttpTransport;

use futures::future::BoxFuture;
use item_browser_domain::{Item, ItemId};
use serde::{Deserialize, Serialize};

use crate::errors::TransportError;

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u64,

    pub limit: u64,

    pub search: String,
}

/// One page as returned by `GET /api/items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsPage {
    pub items: Vec<Item>,

    pub total: u64,

    pub selected_items: Vec<ItemId>,

    pub has_more: bool,
}

// =============================================================================
// ItemsTransport
// =============================================================================

pub trait ItemsTransport: Send + Sync {
    fn fetch_page(&self, query: PageQuery) -> BoxFuture<'_, Result<ItemsPage, TransportError>>;

    fn set_selected(
        &self,
        id: ItemId,
        selected: bool,
    ) -> BoxFuture<'_, Result<(), TransportError>>;

    /// Replaces the server's custom order. An empty list clears it.
    fn reorder(&self, ids: Vec<ItemId>) -> BoxFuture<'_, Result<(), TransportError>>;
}

impl<T: ItemsTransport + ?Sized> ItemsTransport for std::sync::Arc<T> {
    fn fetch_page(&self, query: PageQuery) -> BoxFuture<'_, Result<ItemsPage, TransportError>> {
        (**self).fetch_page(query)
    }

    fn set_selected(
        &self,
        id: ItemId,
        selected: bool,
    ) -> BoxFuture<'_, Result<(), TransportError>> {
        (**self).set_selected(id, selected)
    }

    fn reorder(&self, ids: Vec<ItemId>) -> BoxFuture<'_, Result<(), TransportError>> {
        (**self).reorder(ids)
    }
}
