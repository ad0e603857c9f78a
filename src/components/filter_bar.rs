//! Filter Bar Component
//!
//! Search box plus status dropdown bound to a `ListFilters` signal.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::filters::ListFilters;

#[component]
pub fn FilterBar(
    filters: RwSignal<ListFilters>,
    /// `(value, label)` pairs for the status dropdown
    statuses: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let on_query = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        filters.update(|f| f.query = input.value());
    };

    let on_status = move |ev: web_sys::Event| {
        let Some(select) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok()) else {
            return;
        };
        let value = select.value();
        filters.update(|f| f.status = (!value.is_empty()).then_some(value));
    };

    view! {
        <div class="filter-bar">
            <input
                type="search"
                placeholder="Search..."
                prop:value=move || filters.with(|f| f.query.clone())
                on:input=on_query
            />
            <select
                prop:value=move || filters.with(|f| f.status.clone().unwrap_or_default())
                on:change=on_status
            >
                <option value="">"All states"</option>
                {statuses
                    .into_iter()
                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                    .collect_view()}
            </select>
            <Show when=move || filters.with(|f| !f.is_empty())>
                <button class="filter-clear-btn" on:click=move |_| filters.update(ListFilters::clear)>
                    "Clear"
                </button>
            </Show>
        </div>
    }
}
