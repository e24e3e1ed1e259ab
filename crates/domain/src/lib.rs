//! Domain layer for the item browser.
//!
//! This crate holds the immutable item collection and the two pieces of
//! process-wide state layered on top of it (selection and custom order),
//! plus the query engine that folds all three into a single paginated view.
//!
//! Everything here is synchronous and free of I/O. The [`Catalog`] service
//! object owns the shared state and is what the HTTP layer injects into its
//! handlers.

pub mod catalog;
pub mod item;
pub mod overlay;
pub mod query;
pub mod selection;

pub use catalog::Catalog;
pub use item::{Item, ItemId, ItemStore, StoreError};
pub use overlay::{OrderOverlay, OverlayRank, OverlaySnapshot};
pub use query::{PageRequest, Query, QueryEngine, QueryError, QueryResult, SearchTerm};
pub use selection::SelectionSet;
