use serde::{Deserialize, Serialize};

use super::ItemId;

// =============================================================================
// Item
// =============================================================================

/// A single element of the browsable collection.
///
/// Items are created once when the store is built and never change
/// afterwards; selection and ordering refer to them by [`ItemId`] only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,

    pub value: String,

    pub additional: String,

    pub random: f64,
}

impl Item {
    #[must_use]
    pub fn new(
        id: ItemId,
        value: impl Into<String>,
        additional: impl Into<String>,
        random: f64,
    ) -> Self {
        Self {
            id,
            value: value.into(),
            additional: additional.into(),
            random,
        }
    }
}
