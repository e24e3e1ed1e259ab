//! Client side of the item browser.
//!
//! [`ViewController`] keeps an append-only window of items loaded page by
//! page from the server, mirrors the server's selection, and applies
//! selection toggles and drag-and-drop reorders optimistically. It talks to
//! the server only through the [`ItemsTransport`] port; [`HttpTransport`] is
//! the reqwest-backed implementation.

pub mod config;
pub mod controller;
pub mod errors;
pub mod transport;

pub use config::ClientConfig;
pub use controller::{
    DropOutcome, FetchOutcome, FetchSlot, ScrollMetrics, ViewController, ViewSummary,
};
pub use errors::{ClientError, TransportError, UnsyncedEdit};
pub use transport::{HttpTransport, ItemsPage, ItemsTransport, PageQuery};
