//! UI Components
//!
//! Leptos views for the sidebar, the bookmark list and the forms.

mod bookmark_form;
mod bookmark_list;
mod category_form;
mod dialog_host;
mod form_field;
mod setting_form;
mod sidebar;

pub use bookmark_form::BookmarkForm;
pub use bookmark_list::BookmarkList;
pub use category_form::CategoryForm;
pub use dialog_host::DialogHost;
pub use form_field::FormField;
pub use setting_form::SettingForm;
pub use sidebar::Sidebar;
