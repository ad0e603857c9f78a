//! Item Row Component
//!
//! One entry of an editable list. Stateless: everything comes from props.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;

/// Action offered at the end of a row
#[derive(Clone, Copy)]
pub enum RowAction {
    /// Active row: drag handle plus soft-delete
    Delete(Callback<u32>),
    /// Tray row: restore
    Restore(Callback<u32>),
}

#[component]
pub fn ItemRow(
    id: u32,
    #[prop(into)] label: String,
    /// 1-based position shown in front of active rows
    #[prop(optional)] position: Option<Signal<usize>>,
    action: RowAction,
) -> impl IntoView {
    view! {
        <div class="item-row" data-id=id.to_string()>
            {match action {
                RowAction::Delete(_) => view! { <span class="drag-handle" title="Drag to reorder">"⠿"</span> }.into_any(),
                RowAction::Restore(_) => view! { <span class="drag-handle-placeholder"></span> }.into_any(),
            }}

            {position.map(|p| view! { <span class="item-position">{move || p.get()}"."</span> })}

            <span class="item-label">{label}</span>

            {match action {
                RowAction::Delete(on_delete) => view! {
                    <DeleteConfirmButton on_confirm=Callback::new(move |_: ()| on_delete.run(id)) />
                }.into_any(),
                RowAction::Restore(on_restore) => view! {
                    <button
                        class="restore-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_restore.run(id);
                        }
                    >
                        "↺ Restore"
                    </button>
                }.into_any(),
            }}
        </div>
    }
}
