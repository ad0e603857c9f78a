//! Editable List Component
//!
//! Owns one `ListController` per editing session and wires the ordered
//! view and the soft-delete tray to it. Every applied operation is handed
//! to the caller's callbacks; persistence and rollback are theirs.

use std::fmt::Debug;

use leptos::prelude::*;
use soft_delete_list::{CommitSink, ListController, ListEvent, ListItem};

use crate::components::{OrderedListView, SoftDeleteTray};

/// Commit sink backed by Leptos callbacks
struct CallbackSink<T: 'static> {
    on_order_change: Callback<Vec<T>>,
    on_delete: Callback<u32>,
    on_reinsert: Callback<u32>,
}

impl<T: 'static> Clone for CallbackSink<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for CallbackSink<T> {}

impl<T: ListItem<Id = u32> + 'static> CommitSink<T> for CallbackSink<T> {
    fn on_order_change(&self, active: Vec<T>) {
        self.on_order_change.run(active);
    }

    fn on_delete(&self, id: u32) {
        self.on_delete.run(id);
    }

    fn on_reinsert(&self, id: u32) {
        self.on_reinsert.run(id);
    }
}

/// Run `op` on the controller and commit its event, if any.
///
/// Subscribers are only notified when the lists actually changed.
fn apply<T, K>(
    controller: RwSignal<ListController<T, K>>,
    sink: CallbackSink<T>,
    op: impl FnOnce(&mut ListController<T, K>) -> Option<ListEvent<T>>,
) where
    T: ListItem<Id = u32> + Send + Sync + 'static,
    K: PartialEq + Debug + Send + Sync + 'static,
{
    let event = controller
        .try_maybe_update(|ctl| {
            let event = op(ctl);
            (event.is_some(), event)
        })
        .flatten();
    if let Some(event) = event {
        sink.commit(event);
    }
}

/// Reorderable list with a restore tray.
///
/// `snapshot` carries the session key with the items loaded for it
/// (`None` while loading). A new key resets both lists; a snapshot for the
/// current key is ignored.
#[component]
pub fn EditableList<T, K>(
    snapshot: Signal<Option<(K, Vec<T>)>>,
    on_order_change: Callback<Vec<T>>,
    on_delete: Callback<u32>,
    on_reinsert: Callback<u32>,
) -> impl IntoView
where
    T: ListItem<Id = u32> + Send + Sync + 'static,
    K: PartialEq + Debug + Clone + Send + Sync + 'static,
{
    let controller = RwSignal::new(ListController::<T, K>::new());
    let sink = CallbackSink { on_order_change, on_delete, on_reinsert };

    Effect::new(move |_| {
        if let Some((key, items)) = snapshot.get() {
            controller.maybe_update(|ctl| ctl.load(key, items));
        }
    });

    let active = Signal::derive(move || controller.with(|ctl| ctl.active().to_vec()));
    let removed = Signal::derive(move || controller.with(|ctl| ctl.removed().to_vec()));

    let on_reorder = Callback::new(move |(from, to): (usize, usize)| {
        apply(controller, sink, |ctl| ctl.reorder(from, to));
    });
    let on_soft_delete = Callback::new(move |id: u32| {
        apply(controller, sink, |ctl| ctl.soft_delete(id));
    });
    let on_restore = Callback::new(move |id: u32| {
        apply(controller, sink, |ctl| ctl.restore(id));
    });

    view! {
        <div class="editable-list">
            <OrderedListView items=active on_reorder=on_reorder on_delete=on_soft_delete />
            <SoftDeleteTray items=removed on_restore=on_restore />
        </div>
    }
}
