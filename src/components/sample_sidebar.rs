//! Sample Sidebar Component
//!
//! Filterable list of samples; clicking one selects it for editing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::FilterBar;
use crate::filters::ListFilters;
use crate::models::SampleState;
use crate::services::Notifier;
use crate::store::{AppStateStoreFields, AppStore};

#[component]
pub fn SampleSidebar(store: AppStore, notifier: Notifier) -> impl IntoView {
    let filters = RwSignal::new(ListFilters::default());

    // Load samples on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_samples().await {
                Ok(loaded) => {
                    log::info!("Loaded {} samples", loaded.len());
                    store.samples().set(loaded);
                }
                Err(e) => notifier.error(format!("Could not load samples: {}", e)),
            }
        });
    });

    let visible = move || filters.with(|f| store.samples().with(|samples| f.apply(samples)));

    let statuses = SampleState::ALL
        .iter()
        .map(|state| (state.as_str(), state.display_name()))
        .collect::<Vec<_>>();

    view! {
        <aside class="sample-sidebar">
            <div class="sidebar-header">"Samples"</div>
            <FilterBar filters=filters statuses=statuses />
            <ul class="sample-list">
                <For
                    each=visible
                    key=|sample| sample.id
                    children=move |sample| {
                        let id = sample.id;
                        let is_selected = move || store.selected_sample().get() == Some(id);
                        view! {
                            <li
                                class=move || if is_selected() { "sample-row selected" } else { "sample-row" }
                                on:click=move |_| store.selected_sample().set(Some(id))
                            >
                                <span class="sample-code">{sample.code.clone()}</span>
                                <span class="sample-patient">{sample.patient_name.clone().unwrap_or_default()}</span>
                                <span class=format!("sample-state {}", sample.state.as_str())>
                                    {sample.state.display_name()}
                                </span>
                            </li>
                        }
                    }
                />
            </ul>
            <p class="item-count">
                {move || format!("{} of {} samples", visible().len(), store.samples().with(|s| s.len()))}
            </p>
        </aside>
    }
}
