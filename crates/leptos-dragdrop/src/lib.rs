//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for flat, reorderable Leptos lists.
//! Uses a movement threshold to distinguish click from drag.
//!
//! Document-level listeners are owned by a [`ListenerHandle`] and removed
//! when it is dropped, so a list that unmounts stops receiving events.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropTarget {
    /// Drop on a row (take that row's place)
    Item(u32),
    /// Drop on the gap before row `n` (`n == len` is below the last row)
    Slot(usize),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    /// True for a short moment after a drop, so the trailing click can be ignored
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `drag_just_ended` stays set after a drop
const DRAG_END_GRACE_MS: u32 = 100;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_read,
        start_write,
    }
}

impl DndSignals {
    pub fn is_dragging(&self) -> bool {
        self.dragging_id_read.get().is_some()
    }

    pub fn is_dragging_item(&self, id: u32) -> bool {
        self.dragging_id_read.get() == Some(id)
    }

    pub fn is_target(&self, target: DropTarget) -> bool {
        self.drop_target_read.get() == Some(target)
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    gloo_timers::callback::Timeout::new(DRAG_END_GRACE_MS, move || clear.set(false)).forget();
}

/// Create mousedown handler for draggable rows.
/// Records a pending drag with its start position.
pub fn make_on_mousedown(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Buttons and inputs inside a row keep their own click behaviour
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_id_write.set(Some(item_id));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for rows
pub fn make_on_item_mouseenter(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        match dnd.dragging_id_read.get_untracked() {
            // Dropping on self is a no-op; don't highlight it
            Some(dragging) if dragging != item_id => {
                dnd.drop_target_write.set(Some(DropTarget::Item(item_id)));
            }
            _ => {}
        }
    }
}

/// Create mouseenter handler for gaps between rows
pub fn make_on_slot_mouseenter(dnd: DndSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Slot(slot)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Document listeners installed by [`bind_drag_listeners`].
///
/// Dropping the handle detaches them.
pub struct ListenerHandle {
    document: Option<web_sys::Document>,
    listeners: Vec<(&'static str, Closure<dyn FnMut(web_sys::MouseEvent)>)>,
}

impl ListenerHandle {
    fn attach(listeners: Vec<(&'static str, Closure<dyn FnMut(web_sys::MouseEvent)>)>) -> Self {
        let document = web_sys::window().and_then(|win| win.document());
        if let Some(doc) = &document {
            for (event, cb) in &listeners {
                let _ = doc.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
            }
        }
        Self { document, listeners }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        if let Some(doc) = &self.document {
            for (event, cb) in &self.listeners {
                let _ = doc.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
            }
        }
    }
}

/// Bind document-level mousemove (drag start) and mouseup (drop) handlers.
///
/// `on_drop` receives the dragged id and the target it was released over.
/// The returned handle must be kept alive for as long as the list is mounted.
pub fn bind_drag_listeners<F>(dnd: DndSignals, on_drop: F) -> ListenerHandle
where
    F: Fn(u32, DropTarget) + 'static,
{
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();
        if pending.is_none() || dnd.dragging_id_read.get_untracked().is_some() {
            return;
        }
        let (start_x, start_y) = dnd.start_read.get_untracked();
        let dx = (ev.client_x() - start_x).abs();
        let dy = (ev.client_y() - start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_id_write.set(pending);
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        if dragging_id.is_none() {
            // Plain click: the row's click handler fires on its own
            dnd.pending_id_write.set(None);
            return;
        }

        end_drag(&dnd);
        if let (Some(dragged), Some(target)) = (dragging_id, drop_target) {
            on_drop(dragged, target);
        }
    });

    ListenerHandle::attach(vec![("mousemove", on_mousemove), ("mouseup", on_mouseup)])
}

/// Keep `handle` alive until the current reactive owner is disposed.
pub fn own_listeners(handle: ListenerHandle) {
    let _ = StoredValue::new_local(handle);
}
