//! Sample Process Editor Component
//!
//! Edits the ordered technique steps of the selected sample. Changes are
//! applied locally first; each one is then sent to the backend. When a
//! request fails the editor re-fetches the steps under a new session.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, ApiResult};
use crate::components::EditableList;
use crate::models::TechniqueProcess;
use crate::services::Notifier;
use crate::store::{find_sample, AppStateStoreFields, AppStore};

/// Identity of one editing session.
///
/// `revision` bumps after a failed commit so the re-fetched steps replace
/// the local state instead of being ignored as "same session".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionKey {
    pub sample_id: u32,
    pub revision: u32,
}

type Snapshot = Option<(SessionKey, Vec<TechniqueProcess>)>;

/// A failed commit reloads only the sample it was sent for, and only if
/// that sample is still open. Another sample's session is left alone.
fn should_reload(commit_sample: u32, selected: Option<u32>) -> bool {
    selected == Some(commit_sample)
}

/// A fetched snapshot is applied only if it matches the latest request:
/// same sample still selected and no newer revision requested since.
fn is_current_load(loaded: SessionKey, selected: Option<u32>, latest_revision: u32) -> bool {
    selected == Some(loaded.sample_id) && loaded.revision == latest_revision
}

/// The steps on screen belong to another sample than the one selected
fn shows_other_sample(session_sample: Option<u32>, selected: u32) -> bool {
    session_sample != Some(selected)
}

/// Send one commit for `sample_id` in the background.
///
/// Fire-and-forget: the list keeps accepting edits while it runs. On
/// failure the revision is bumped, which re-fetches the steps.
fn spawn_commit(
    sample_id: u32,
    what: String,
    done: Option<String>,
    request: impl Future<Output = ApiResult<()>> + 'static,
    notifier: Notifier,
    selected: Signal<Option<u32>>,
    revision: WriteSignal<u32>,
) {
    spawn_local(async move {
        match request.await {
            Ok(()) => {
                if let Some(done) = done {
                    notifier.info(done);
                }
            }
            Err(e) => {
                if should_reload(sample_id, selected.get_untracked()) {
                    notifier.error(format!("{} failed: {}. Reloading steps.", what, e));
                    revision.update(|r| *r += 1);
                } else {
                    notifier.error(format!("{} failed for sample {}: {}", what, sample_id, e));
                }
            }
        }
    });
}

#[component]
pub fn SampleProcessEditor(store: AppStore, notifier: Notifier) -> impl IntoView {
    let (revision, set_revision) = signal(0u32);
    let (snapshot, set_snapshot) = signal::<Snapshot>(None);

    let selected = Signal::derive(move || store.selected_sample().get());

    // Load steps when the sample or revision changes
    Effect::new(move |_| {
        let current = revision.get();
        let Some(sample_id) = selected.get() else {
            set_snapshot.set(None);
            return;
        };
        // Don't show the previous sample's steps while this one loads
        if shows_other_sample(snapshot.with_untracked(|s| s.as_ref().map(|(key, _)| key.sample_id)), sample_id) {
            set_snapshot.set(None);
        }
        let key = SessionKey { sample_id, revision: current };
        spawn_local(async move {
            let result = commands::list_sample_techniques(sample_id).await;
            // Another sample or a newer reload may have been requested meanwhile
            if !is_current_load(key, selected.get_untracked(), revision.get_untracked()) {
                log::debug!("Dropping stale steps for {:?}", key);
                return;
            }
            match result {
                Ok(steps) => {
                    log::debug!("Loaded {} steps for {:?}", steps.len(), key);
                    set_snapshot.set(Some((key, steps)));
                }
                Err(e) => notifier.error(format!("Could not load steps of sample {}: {}", sample_id, e)),
            }
        });
    });

    let session_sample = move || snapshot.with_untracked(|s| s.as_ref().map(|(key, _)| key.sample_id));

    let on_order_change = Callback::new(move |steps: Vec<TechniqueProcess>| {
        let Some(sample_id) = session_sample() else { return };
        let ids: Vec<u32> = steps.iter().map(|s| s.id).collect();
        spawn_commit(
            sample_id,
            "Saving step order".to_string(),
            None,
            async move { commands::set_technique_order(sample_id, &ids).await },
            notifier,
            selected,
            set_revision,
        );
    });

    let on_delete = Callback::new(move |technique_id: u32| {
        let Some(sample_id) = session_sample() else { return };
        spawn_commit(
            sample_id,
            format!("Removing step {}", technique_id),
            Some("Step moved to the removed list".to_string()),
            commands::remove_sample_technique(sample_id, technique_id),
            notifier,
            selected,
            set_revision,
        );
    });

    let on_reinsert = Callback::new(move |technique_id: u32| {
        let Some(sample_id) = session_sample() else { return };
        spawn_commit(
            sample_id,
            format!("Restoring step {}", technique_id),
            Some("Step restored at the end of the list".to_string()),
            commands::reinsert_sample_technique(sample_id, technique_id),
            notifier,
            selected,
            set_revision,
        );
    });

    let title = move || {
        selected.get().map(|id| {
            store.samples().with(|samples| match find_sample(samples, id) {
                Some(sample) => format!("Sample {}", sample.code),
                None => format!("Sample #{}", id),
            })
        })
    };

    view! {
        <main class="main-content">
            <Show
                when=move || selected.get().is_some()
                fallback=|| view! { <p class="empty-hint">"Select a sample to edit its technique steps."</p> }
            >
                <h1>{title}</h1>
                <p class="hint">"Drag steps to change the processing order (Alt+↑/↓ on a focused step)."</p>
                <Show
                    when=move || snapshot.with(|s| s.is_some())
                    fallback=|| view! { <p class="loading">"Loading..."</p> }
                >
                    <EditableList
                        snapshot=Signal::from(snapshot)
                        on_order_change=on_order_change
                        on_delete=on_delete
                        on_reinsert=on_reinsert
                    />
                </Show>
            </Show>
        </main>
    }
}
