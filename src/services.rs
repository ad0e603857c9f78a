//! Application Services
//!
//! Services are plain `Copy` handles created in `App` and passed to the
//! components that need them.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Info notices disappear after this long; errors stay until dismissed
const INFO_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub level: NoticeLevel,
    pub message: String,
}

/// User-facing notifications
#[derive(Clone, Copy)]
pub struct Notifier {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u32>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    /// Notices currently shown, oldest first
    pub fn notices(&self) -> Signal<Vec<Notice>> {
        self.notices.into()
    }

    pub fn info(&self, message: impl Into<String>) {
        let id = self.push(NoticeLevel::Info, message.into());
        let this = *self;
        Timeout::new(INFO_TIMEOUT_MS, move || this.dismiss(id)).forget();
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        log::error!("{}", message);
        self.push(NoticeLevel::Error, message);
    }

    pub fn dismiss(&self, id: u32) {
        // try_update: a timer may fire after the app was torn down
        self.notices.try_update(|notices| notices.retain(|n| n.id != id));
    }

    fn push(&self, level: NoticeLevel, message: String) -> u32 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.notices.update(|notices| notices.push(Notice { id, level, message }));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_stay_until_dismissed() {
        let notifier = Notifier::default();
        notifier.error("Saving step order failed");
        notifier.error("Removing step 4 failed");

        let shown = notifier.notices().get_untracked();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].level, NoticeLevel::Error);
        assert_ne!(shown[0].id, shown[1].id);

        notifier.dismiss(shown[0].id);
        let left = notifier.notices().get_untracked();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].message, "Removing step 4 failed");
    }
}
