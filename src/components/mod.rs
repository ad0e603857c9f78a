//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod item_row;
mod ordered_list_view;
mod soft_delete_tray;
mod editable_list;
mod filter_bar;
mod sample_sidebar;
mod sample_process_editor;
mod notification_stack;

pub use delete_confirm_button::DeleteConfirmButton;
pub use item_row::{ItemRow, RowAction};
pub use ordered_list_view::OrderedListView;
pub use soft_delete_tray::SoftDeleteTray;
pub use editable_list::EditableList;
pub use filter_bar::FilterBar;
pub use sample_sidebar::SampleSidebar;
pub use sample_process_editor::SampleProcessEditor;
pub use notification_stack::NotificationStack;
