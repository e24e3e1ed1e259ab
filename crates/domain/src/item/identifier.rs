//! Item identifier value object.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// ItemId
// =============================================================================

/// Stable identifier of an item.
///
/// Ids are positive integers assigned once when the collection is built.
/// Ascending id order is the *natural order* of the collection.
///
/// # Examples
///
/// ```
/// use item_browser_domain::ItemId;
///
/// let identifier = ItemId::new(42);
/// assert_eq!(identifier.value(), 42);
/// assert_eq!(identifier.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for u64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn ordering_follows_numeric_value() {
        let mut identifiers = vec![ItemId::new(10), ItemId::new(2), ItemId::new(33)];
        identifiers.sort();

        assert_eq!(
            identifiers,
            vec![ItemId::new(2), ItemId::new(10), ItemId::new(33)]
        );
    }

    #[rstest]
    #[case(1, "1")]
    #[case(1_000_000, "1000000")]
    fn display_is_decimal(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(ItemId::new(value).to_string(), expected);
    }

    #[rstest]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&ItemId::new(7)).unwrap();
        assert_eq!(json, "7");

        let parsed: ItemId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, ItemId::new(7));
    }
}
