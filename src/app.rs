//! My Bookmarks Frontend App
//!
//! Main application component: category sidebar, a main panel switching
//! between the bookmark list and the forms, and the dialog overlay.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::api::Api;
use crate::components::{BookmarkForm, BookmarkList, CategoryForm, DialogHost, SettingForm, Sidebar};
use crate::context::{self, AppContext, Content};
use crate::dialog::Dialogs;
use crate::models::CategoryFilter;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let dialogs = Dialogs::new();
    let api = Api::new(dialogs);
    let (content, set_content) = signal(Content::ShowBookmark);
    let ctx = AppContext::new((content, set_content));

    // Provide context to all children
    provide_context(store);
    provide_context(dialogs);
    provide_context(api);
    provide_context(ctx);

    // Load categories and the first page of bookmarks on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Err(e) = actions::refresh_categories(api, store).await {
                if e.ends_session() {
                    return;
                }
            }
            actions::show_bookmarks(api, store, CategoryFilter::all()).await;
        });
    });

    // Keep the document title in sync with the view
    Effect::new(move |_| {
        let name = store.category().get().name;
        context::set_title(&content.get().title(&name));
    });

    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="main-content">
                {move || match content.get() {
                    Content::ShowBookmark => view! { <BookmarkList /> }.into_any(),
                    Content::Category(mode) => view! { <CategoryForm mode=mode /> }.into_any(),
                    Content::Bookmark(mode) => view! { <BookmarkForm mode=mode /> }.into_any(),
                    Content::Setting => view! { <SettingForm /> }.into_any(),
                }}
            </main>
            <DialogHost />
        </div>
    }
}
