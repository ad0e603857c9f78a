//! List Controller
//!
//! Owns the active and removed lists of one editing session.

use std::fmt::Debug;

use crate::commit::ListEvent;
use crate::item::ListItem;
use crate::ops::{move_item, position_of, take_by_id};

/// Active list plus soft-delete tray.
///
/// Invariant: no id is in both lists. Operations that would break it, or
/// that reference a missing id or index, leave both lists untouched and
/// return `None`.
///
/// `K` identifies the entity whose list is being edited (e.g. a sample id).
/// A snapshot loaded under a new key starts a new session.
#[derive(Clone, Debug)]
pub struct ListController<T: ListItem, K = ()> {
    active: Vec<T>,
    removed: Vec<T>,
    context: Option<K>,
}

impl<T: ListItem, K> Default for ListController<T, K> {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            removed: Vec::new(),
            context: None,
        }
    }
}

impl<T: ListItem, K: PartialEq + Debug> ListController<T, K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller seeded with an active snapshot and an empty tray
    pub fn with_snapshot(snapshot: Vec<T>) -> Self {
        Self {
            active: snapshot,
            ..Self::default()
        }
    }

    pub fn active(&self) -> &[T] {
        &self.active
    }

    pub fn removed(&self) -> &[T] {
        &self.removed
    }

    /// Key of the current session, if one was loaded
    pub fn context(&self) -> Option<&K> {
        self.context.as_ref()
    }

    pub fn is_active(&self, id: T::Id) -> bool {
        position_of(&self.active, id).is_some()
    }

    pub fn is_removed(&self, id: T::Id) -> bool {
        position_of(&self.removed, id).is_some()
    }

    /// Move the active entry at `from` to `to`
    pub fn reorder(&mut self, from: usize, to: usize) -> Option<ListEvent<T>> {
        let Some(next) = move_item(&self.active, from, to) else {
            log::trace!("reorder {} -> {} ignored (len {})", from, to, self.active.len());
            return None;
        };
        log::debug!("reorder {} -> {}", from, to);
        self.active = next;
        Some(ListEvent::OrderChanged(self.active.clone()))
    }

    /// Move an active entry to the end of the tray
    pub fn soft_delete(&mut self, id: T::Id) -> Option<ListEvent<T>> {
        let Some((active, taken)) = take_by_id(&self.active, id) else {
            log::trace!("soft_delete {:?} ignored: not active", id);
            return None;
        };
        log::debug!("soft_delete {:?} ({})", id, taken.label());
        self.active = active;
        self.removed.push(taken);
        Some(ListEvent::Deleted {
            id,
            active: self.active.clone(),
        })
    }

    /// Move a tray entry to the end of the active list
    pub fn restore(&mut self, id: T::Id) -> Option<ListEvent<T>> {
        let Some((removed, taken)) = take_by_id(&self.removed, id) else {
            log::trace!("restore {:?} ignored: not in tray", id);
            return None;
        };
        log::debug!("restore {:?} ({})", id, taken.label());
        self.removed = removed;
        self.active.push(taken);
        Some(ListEvent::Restored {
            id,
            active: self.active.clone(),
        })
    }

    /// Replace the active list and empty the tray
    pub fn reset(&mut self, snapshot: Vec<T>) {
        log::debug!("reset with {} items", snapshot.len());
        self.active = snapshot;
        self.removed.clear();
    }

    /// Load a snapshot for `key`.
    ///
    /// Resets when `key` differs from the current session's key and returns
    /// `true`. A snapshot for the same key is ignored: the session already
    /// owns both lists.
    pub fn load(&mut self, key: K, snapshot: Vec<T>) -> bool {
        if self.context.as_ref() == Some(&key) {
            log::trace!("load for {:?} ignored: same session", key);
            return false;
        }
        log::debug!("new session {:?}", key);
        self.context = Some(key);
        self.reset(snapshot);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Entry {
        id: u32,
        label: &'static str,
    }

    impl ListItem for Entry {
        type Id = u32;
        fn id(&self) -> u32 { self.id }
        fn label(&self) -> String { self.label.to_string() }
    }

    fn entry(id: u32, label: &'static str) -> Entry {
        Entry { id, label }
    }

    fn ids(list: &[Entry]) -> Vec<u32> {
        list.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_reorder_moves_first_to_last() {
        let mut ctl: ListController<Entry> =
            ListController::with_snapshot(vec![entry(1, "A"), entry(2, "B"), entry(3, "C")]);

        let event = ctl.reorder(0, 2).expect("reorder should apply");

        assert_eq!(ids(ctl.active()), vec![2, 3, 1]);
        assert_eq!(event, ListEvent::OrderChanged(ctl.active().to_vec()));
        assert!(ctl.removed().is_empty());
    }

    #[test]
    fn test_reorder_noops() {
        let mut ctl: ListController<Entry> =
            ListController::with_snapshot(vec![entry(1, "A"), entry(2, "B")]);

        assert!(ctl.reorder(1, 1).is_none());
        assert!(ctl.reorder(0, 5).is_none());
        assert!(ctl.reorder(7, 0).is_none());
        assert_eq!(ids(ctl.active()), vec![1, 2]);
    }

    #[test]
    fn test_delete_then_restore_appends() {
        let mut ctl: ListController<Entry> =
            ListController::with_snapshot(vec![entry(1, "A"), entry(2, "B")]);

        let deleted = ctl.soft_delete(1).unwrap();
        assert_eq!(deleted, ListEvent::Deleted { id: 1, active: vec![entry(2, "B")] });
        assert_eq!(ids(ctl.active()), vec![2]);
        assert_eq!(ids(ctl.removed()), vec![1]);

        let restored = ctl.restore(1).unwrap();
        assert_eq!(restored.active(), &[entry(2, "B"), entry(1, "A")][..]);
        assert!(ctl.removed().is_empty());
    }

    #[test]
    fn test_missing_ids_are_ignored() {
        let mut ctl: ListController<Entry> = ListController::with_snapshot(vec![entry(1, "A")]);

        assert!(ctl.soft_delete(99).is_none());
        assert!(ctl.restore(1).is_none());
        assert_eq!(ids(ctl.active()), vec![1]);
        assert!(ctl.removed().is_empty());
    }

    #[test]
    fn test_delete_last_item_leaves_empty_list() {
        let mut ctl: ListController<Entry> = ListController::with_snapshot(vec![entry(1, "A")]);
        ctl.soft_delete(1).unwrap();
        assert!(ctl.active().is_empty());
        assert!(ctl.is_removed(1));
        assert!(!ctl.is_active(1));
    }

    #[test]
    fn test_reset_clears_tray() {
        let mut ctl: ListController<Entry> =
            ListController::with_snapshot(vec![entry(1, "A"), entry(2, "B")]);
        ctl.soft_delete(2);

        ctl.reset(vec![entry(5, "E")]);

        assert_eq!(ids(ctl.active()), vec![5]);
        assert!(ctl.removed().is_empty());
    }

    #[test]
    fn test_load_resets_only_on_new_key() {
        let mut ctl: ListController<Entry, u32> = ListController::new();

        assert!(ctl.load(10, vec![entry(1, "A"), entry(2, "B")]));
        ctl.soft_delete(1);

        // Same sample: keep the session
        assert!(!ctl.load(10, vec![entry(1, "A"), entry(2, "B")]));
        assert_eq!(ids(ctl.removed()), vec![1]);

        // Different sample: rebuild from scratch
        assert!(ctl.load(11, vec![entry(3, "C")]));
        assert_eq!(ctl.context(), Some(&11));
        assert_eq!(ids(ctl.active()), vec![3]);
        assert!(ctl.removed().is_empty());
    }
}
