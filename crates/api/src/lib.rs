//! HTTP surface of the item browser.
//!
//! Exposes the item query, selection and reorder endpoints over a shared
//! [`item_browser_domain::Catalog`], together with configuration loading and
//! server bootstrap for the `item-browser-server` binary.

pub mod config;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{AppConfig, ConfigurationError, DatasetConfig, PagingConfig};
pub use errors::ApiError;
pub use routes::create_router;
pub use server::{Server, ServerConfig};
pub use state::AppState;
