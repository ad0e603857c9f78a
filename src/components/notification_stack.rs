//! Notification Stack Component

use leptos::prelude::*;

use crate::services::{NoticeLevel, Notifier};

#[component]
pub fn NotificationStack(notifier: Notifier) -> impl IntoView {
    let notices = notifier.notices();

    view! {
        <div class="notification-stack">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = match notice.level {
                        NoticeLevel::Info => "notice info",
                        NoticeLevel::Error => "notice error",
                    };
                    view! {
                        <div class=class>
                            <span class="notice-text">{notice.message}</span>
                            <button class="notice-close" on:click=move |_| notifier.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
