//! Soft Delete Tray Component
//!
//! Removed items waiting to be restored. Renders nothing when empty.

use leptos::prelude::*;
use soft_delete_list::ListItem;

use crate::components::{ItemRow, RowAction};

#[component]
pub fn SoftDeleteTray<T>(
    items: Signal<Vec<T>>,
    on_restore: Callback<u32>,
) -> impl IntoView
where
    T: ListItem<Id = u32> + Send + Sync + 'static,
{
    view! {
        <Show when=move || items.with(|list| !list.is_empty())>
            <div class="soft-delete-tray">
                <div class="tray-header">{move || format!("Removed ({})", items.with(|list| list.len()))}</div>
                <For
                    each=move || items.get()
                    key=|item| item.id()
                    children=move |item| {
                        view! {
                            <ItemRow
                                id=item.id()
                                label=item.label()
                                action=RowAction::Restore(on_restore)
                            />
                        }
                    }
                />
            </div>
        </Show>
    }
}
