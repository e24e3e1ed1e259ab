//! Items and the store that owns them.

mod identifier;
mod record;
mod store;

pub use identifier::ItemId;
pub use record::Item;
pub use store::{ItemStore, StoreError};
