use item_browser_domain::{Item, ItemId};

// =============================================================================
// DragState
// =============================================================================

/// The item being dragged and the item currently under it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DragState {
    dragged: Option<ItemId>,
    target: Option<ItemId>,
}

impl DragState {
    pub(crate) fn begin(&mut self, id: ItemId) {
        self.dragged = Some(id);
        self.target = None;
    }

    /// Records the hovered item. Hovering the dragged item itself, or
    /// hovering with no drag in progress, changes nothing.
    pub(crate) fn hover(&mut self, id: ItemId) -> bool {
        match self.dragged {
            Some(dragged) if dragged != id => {
                self.target = Some(id);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn end(&mut self) {
        *self = Self::default();
    }

    /// Ends the gesture, returning `(dragged, target)` when it describes a
    /// real move.
    pub(crate) fn finish(&mut self) -> Option<(ItemId, ItemId)> {
        let Self { dragged, target } = std::mem::take(self);
        match (dragged, target) {
            (Some(dragged), Some(target)) if dragged != target => Some((dragged, target)),
            _ => None,
        }
    }

    pub(crate) const fn dragged(&self) -> Option<ItemId> {
        self.dragged
    }

    pub(crate) const fn target(&self) -> Option<ItemId> {
        self.target
    }
}

// =============================================================================
// Splice
// =============================================================================

/// Moves `dragged` to the index `target` occupied before the move.
///
/// Both indexes are taken from the sequence as it was, so dragging down
/// lands after the target and dragging up lands before it. Returns false
/// when either id is not in the sequence.
pub(crate) fn move_onto(items: &mut Vec<Item>, dragged: ItemId, target: ItemId) -> bool {
    let position = |id: ItemId| items.iter().position(|item| item.id == id);

    let (Some(from), Some(to)) = (position(dragged), position(target)) else {
        return false;
    };

    let item = items.remove(from);
    items.insert(to, item);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn letters(count: u8) -> Vec<Item> {
        (1..=count)
            .map(|id| {
                let value = char::from(b'a' + id - 1).to_string();
                Item::new(ItemId::new(u64::from(id)), value, "", 0.0)
            })
            .collect()
    }

    fn values(items: &[Item]) -> String {
        items.iter().map(|item| item.value.as_str()).collect()
    }

    mod splice {
        use super::*;

        #[rstest]
        #[case(1, 3, "bca")]
        #[case(3, 1, "cab")]
        #[case(1, 2, "bac")]
        #[case(2, 1, "bac")]
        fn moves_to_target_index(
            #[case] dragged: u64,
            #[case] target: u64,
            #[case] expected: &str,
        ) {
            let mut items = letters(3);

            assert!(move_onto(&mut items, ItemId::new(dragged), ItemId::new(target)));
            assert_eq!(values(&items), expected);
        }

        #[rstest]
        fn unknown_id_leaves_sequence_alone() {
            let mut items = letters(3);

            assert!(!move_onto(&mut items, ItemId::new(9), ItemId::new(1)));
            assert!(!move_onto(&mut items, ItemId::new(1), ItemId::new(9)));
            assert_eq!(values(&items), "abc");
        }
    }

    mod drag_state {
        use super::*;

        #[rstest]
        fn full_gesture_yields_move() {
            let mut state = DragState::default();
            state.begin(ItemId::new(1));

            assert!(state.hover(ItemId::new(3)));
            assert_eq!(state.finish(), Some((ItemId::new(1), ItemId::new(3))));
            assert_eq!(state, DragState::default());
        }

        #[rstest]
        fn hovering_self_is_ignored() {
            let mut state = DragState::default();
            state.begin(ItemId::new(2));

            assert!(!state.hover(ItemId::new(2)));
            assert_eq!(state.target(), None);
            assert_eq!(state.finish(), None);
        }

        #[rstest]
        fn hover_without_drag_is_ignored() {
            let mut state = DragState::default();

            assert!(!state.hover(ItemId::new(2)));
            assert_eq!(state.finish(), None);
        }

        #[rstest]
        fn end_clears_everything() {
            let mut state = DragState::default();
            state.begin(ItemId::new(1));
            state.hover(ItemId::new(2));

            state.end();

            assert_eq!(state.dragged(), None);
            assert_eq!(state.target(), None);
        }
    }
}
