//! Ordered List View Component
//!
//! Renders the active list and turns drag gestures into `(from, to)`
//! reorder intents. Uses leptos-dragdrop with explicit slots between rows.
//! The list itself never changes here; it re-renders when the owner
//! passes a new one.

use leptos::prelude::*;
use leptos_dragdrop::*;
use soft_delete_list::{drop_slot_to_index, position_of, ListItem};

use crate::components::{ItemRow, RowAction};

/// Resolve a drop into a reorder intent
fn drop_to_move<T: ListItem<Id = u32>>(items: &[T], dragged: u32, target: DropTarget) -> Option<(usize, usize)> {
    let from = position_of(items, dragged)?;
    let to = match target {
        DropTarget::Item(target_id) => position_of(items, target_id).filter(|&to| to != from)?,
        DropTarget::Slot(slot) => drop_slot_to_index(from, slot, items.len())?,
    };
    Some((from, to))
}

/// Resolve Alt+ArrowUp / Alt+ArrowDown on the row at `index`
fn key_to_move(key: &str, index: usize, len: usize) -> Option<(usize, usize)> {
    let to = match key {
        "ArrowUp" => index.checked_sub(1)?,
        "ArrowDown" if index + 1 < len => index + 1,
        _ => return None,
    };
    Some((index, to))
}

/// 1-based position of `id`, or 0 while the row is on its way out
fn display_position<T: ListItem<Id = u32>>(items: &[T], id: u32) -> usize {
    position_of(items, id).map_or(0, |index| index + 1)
}

#[component]
pub fn OrderedListView<T>(
    items: Signal<Vec<T>>,
    on_reorder: Callback<(usize, usize)>,
    on_delete: Callback<u32>,
) -> impl IntoView
where
    T: ListItem<Id = u32> + Send + Sync + 'static,
{
    let dnd = create_dnd_signals();

    let listeners = bind_drag_listeners(dnd, move |dragged_id, target| {
        let intent = items.with_untracked(|list| drop_to_move(list, dragged_id, target));
        log::debug!("[DND] drop {} on {:?} -> {:?}", dragged_id, target, intent);
        if let Some(intent) = intent {
            on_reorder.run(intent);
        }
    });
    own_listeners(listeners);

    view! {
        <div class="ordered-list">
            <DropSlot dnd=dnd slot=0usize />

            <For
                each=move || items.get()
                // Keyed by id so a moved row keeps its element (and focus)
                key=|item| item.id()
                children=move |item| {
                    let id = item.id();
                    let position = Memo::new(move |_| items.with(|list| display_position(list, id)));
                    let row_ref = NodeRef::<leptos::html::Div>::new();

                    let row_class = move || {
                        let mut c = String::from("ordered-row");
                        if dnd.is_dragging_item(id) { c.push_str(" dragging"); }
                        if dnd.is_target(DropTarget::Item(id)) { c.push_str(" drop-target"); }
                        c
                    };

                    let on_keydown = move |ev: web_sys::KeyboardEvent| {
                        if !ev.alt_key() { return; }
                        let Some(index) = position.get_untracked().checked_sub(1) else { return };
                        let len = items.with_untracked(|list| list.len());
                        if let Some(intent) = key_to_move(&ev.key(), index, len) {
                            ev.prevent_default();
                            on_reorder.run(intent);
                            // Moving the node in the DOM may blur it
                            request_animation_frame(move || {
                                if let Some(row) = row_ref.get_untracked() {
                                    let _ = row.focus();
                                }
                            });
                        }
                    };

                    view! {
                        <div
                            node_ref=row_ref
                            class=row_class
                            tabindex="0"
                            on:mousedown=make_on_mousedown(dnd, id)
                            on:mouseenter=make_on_item_mouseenter(dnd, id)
                            on:mouseleave=make_on_mouseleave(dnd)
                            on:keydown=on_keydown
                        >
                            <ItemRow
                                id=id
                                label=item.label()
                                position=Signal::from(position)
                                action=RowAction::Delete(on_delete)
                            />
                        </div>

                        <DropSlot dnd=dnd slot=Signal::from(position) />
                    }
                }
            />

            <Show when=move || items.with(|list| list.is_empty())>
                <div class="ordered-list-empty">"No steps"</div>
            </Show>
        </div>
    }
}

/// Gap between rows, visible only while dragging.
///
/// `slot` follows the row above it, so it is a signal.
#[component]
fn DropSlot(dnd: DndSignals, #[prop(into)] slot: Signal<usize>) -> impl IntoView {
    let slot_class = move || {
        let mut c = String::from("drop-zone");
        if !dnd.is_dragging() { c.push_str(" hidden"); }
        if dnd.is_target(DropTarget::Slot(slot.get())) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=move |ev| make_on_slot_mouseenter(dnd, slot.get_untracked())(ev)
            on:mouseleave=make_on_mouseleave(dnd)
        />
    }
}
