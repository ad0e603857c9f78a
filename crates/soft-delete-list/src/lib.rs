//! Soft-Delete List
//!
//! State-transition core for a reorderable list whose items are "removed"
//! into a recoverable tray instead of being deleted outright.
//!
//! The crate knows nothing about rendering or persistence:
//! - `ListController` owns the active and removed lists of one editing session
//! - every successful operation yields a `ListEvent`
//! - callers forward events to a `CommitSink` (network, store, ...)

mod item;
mod ops;
mod controller;
mod commit;

pub use item::ListItem;
pub use ops::{drop_slot_to_index, move_item, position_of, take_by_id};
pub use controller::ListController;
pub use commit::{CommitSink, ListEvent};
