//! Commit Notifications
//!
//! Events produced by the controller and the sink they are delivered to.

use crate::item::ListItem;

/// Outcome of a successful list operation.
///
/// Every variant carries the new active list so a sink can persist the
/// whole order if it prefers to.
#[derive(Clone, Debug, PartialEq)]
pub enum ListEvent<T: ListItem> {
    /// Active list was reordered
    OrderChanged(Vec<T>),
    /// Item moved from the active list into the tray
    Deleted { id: T::Id, active: Vec<T> },
    /// Item moved from the tray back to the end of the active list
    Restored { id: T::Id, active: Vec<T> },
}

impl<T: ListItem> ListEvent<T> {
    /// Active list after the operation
    pub fn active(&self) -> &[T] {
        match self {
            ListEvent::OrderChanged(active) => active,
            ListEvent::Deleted { active, .. } => active,
            ListEvent::Restored { active, .. } => active,
        }
    }
}

/// Receiver of commit notifications (network PATCH, local store, ...).
///
/// Delivery is fire-and-forget. Whatever a sink does with a failure is up
/// to the sink; the controller has already moved on.
pub trait CommitSink<T: ListItem> {
    /// Called after every successful reorder
    fn on_order_change(&self, active: Vec<T>);

    /// Called after an item is soft-deleted
    fn on_delete(&self, _id: T::Id) {}

    /// Called after an item is restored from the tray
    fn on_reinsert(&self, _id: T::Id) {}

    /// Route an event to the matching callback
    fn commit(&self, event: ListEvent<T>) {
        match event {
            ListEvent::OrderChanged(active) => self.on_order_change(active),
            ListEvent::Deleted { id, .. } => self.on_delete(id),
            ListEvent::Restored { id, .. } => self.on_reinsert(id),
        }
    }
}
