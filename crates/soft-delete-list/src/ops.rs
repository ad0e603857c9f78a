//! List Operations
//!
//! Pure functions over slices. They never mutate their input and return
//! `None` when the operation would be a no-op.

use crate::item::ListItem;

/// Index of the entry with the given id
pub fn position_of<T: ListItem>(list: &[T], id: T::Id) -> Option<usize> {
    list.iter().position(|item| item.id() == id)
}

/// Move the element at `from` so that it ends up at `to`.
///
/// Stable move: every other element keeps its relative order.
/// Returns `None` when `from == to` or either index is outside `[0, len)`.
pub fn move_item<T: Clone>(list: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    let len = list.len();
    if from == to || from >= len || to >= len {
        return None;
    }
    let mut next = list.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    Some(next)
}

/// Split off the entry with `id`.
///
/// Returns the remaining list and the taken entry, or `None` if absent.
pub fn take_by_id<T: ListItem>(list: &[T], id: T::Id) -> Option<(Vec<T>, T)> {
    let index = position_of(list, id)?;
    let mut rest = list.to_vec();
    let taken = rest.remove(index);
    Some((rest, taken))
}

/// Translate a drop slot into a target index for [`move_item`].
///
/// Slots are the gaps around rows: slot `0` is above the first row and
/// slot `len` is below the last one. Dropping into either gap adjacent to
/// the dragged row leaves it in place. Slots past the end clamp to the
/// last index (append at end).
pub fn drop_slot_to_index(from: usize, slot: usize, len: usize) -> Option<usize> {
    if len == 0 || from >= len {
        return None;
    }
    let slot = slot.min(len);
    // Removing the dragged row shifts every later slot up by one
    let to = if slot > from { slot - 1 } else { slot };
    let to = to.min(len - 1);
    (to != from).then_some(to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Step(u32);

    impl ListItem for Step {
        type Id = u32;
        fn id(&self) -> u32 { self.0 }
        fn label(&self) -> String { format!("Step {}", self.0) }
    }

    fn ids(list: &[Step]) -> Vec<u32> {
        list.iter().map(|s| s.0).collect()
    }

    #[test]
    fn test_move_item_forward_and_back() {
        let list = vec![Step(1), Step(2), Step(3), Step(4)];

        let forward = move_item(&list, 0, 2).unwrap();
        assert_eq!(ids(&forward), vec![2, 3, 1, 4]);

        let back = move_item(&list, 3, 1).unwrap();
        assert_eq!(ids(&back), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_move_item_rejects_bad_indexes() {
        let list = vec![Step(1), Step(2)];
        assert!(move_item(&list, 1, 1).is_none());
        assert!(move_item(&list, 2, 0).is_none());
        assert!(move_item(&list, 0, 2).is_none());
        assert!(move_item::<Step>(&[], 0, 0).is_none());
    }

    #[test]
    fn test_take_by_id() {
        let list = vec![Step(1), Step(2), Step(3)];
        let (rest, taken) = take_by_id(&list, 2).unwrap();
        assert_eq!(taken, Step(2));
        assert_eq!(ids(&rest), vec![1, 3]);
        assert!(take_by_id(&list, 9).is_none());
    }

    #[test]
    fn test_drop_slot_to_index() {
        // Rows: 0 1 2 3, dragging row 1
        assert_eq!(drop_slot_to_index(1, 0, 4), Some(0));
        assert_eq!(drop_slot_to_index(1, 1, 4), None);
        assert_eq!(drop_slot_to_index(1, 2, 4), None);
        assert_eq!(drop_slot_to_index(1, 3, 4), Some(2));
        assert_eq!(drop_slot_to_index(1, 4, 4), Some(3));
    }

    #[test]
    fn test_drop_slot_past_end_appends() {
        assert_eq!(drop_slot_to_index(0, 99, 3), Some(2));
        // Already last: nothing to do
        assert_eq!(drop_slot_to_index(2, 99, 3), None);
    }

    #[test]
    fn test_drop_slot_on_empty_or_bad_source() {
        assert_eq!(drop_slot_to_index(0, 0, 0), None);
        assert_eq!(drop_slot_to_index(5, 0, 3), None);
    }
}
