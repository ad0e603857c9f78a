//! LIMS Frontend App
//!
//! Two-column layout: sample sidebar and the technique step editor.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NotificationStack, SampleProcessEditor, SampleSidebar};
use crate::services::Notifier;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Services and state are passed down explicitly
    let store = Store::new(AppState::default());
    let notifier = Notifier::new();

    view! {
        <div class="app-layout">
            <SampleSidebar store=store notifier=notifier />
            <SampleProcessEditor store=store notifier=notifier />
            <NotificationStack notifier=notifier />
        </div>
    }
}
