//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! created in `App` and handed to components as a prop.

use reactive_stores::Store;

use crate::models::Sample;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Samples shown in the sidebar
    pub samples: Vec<Sample>,
    /// Sample whose technique steps are being edited
    pub selected_sample: Option<u32>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Look up a loaded sample by id
pub fn find_sample(samples: &[Sample], id: u32) -> Option<&Sample> {
    samples.iter().find(|sample| sample.id == id)
}
