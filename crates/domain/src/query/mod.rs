//! Filtering, ordering and pagination over the item collection.

mod engine;
mod request;

pub use engine::{QueryEngine, QueryResult};
pub use request::{PageRequest, Query, QueryError, SearchTerm};
