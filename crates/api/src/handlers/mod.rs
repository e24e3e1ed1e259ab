pub mod health;
pub mod items;
pub mod reorder;
pub mod selection;

// Re-export handlers for convenient access
pub use health::health_check;
pub use items::list_items;
pub use reorder::reorder_items;
pub use selection::select_item;
