//! Sidebar Component
//!
//! Category navigation plus entries for adding a category and settings.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::use_api;
use crate::config::ALL_BOOKMARKS_ID;
use crate::context::{AppContext, Content, Mode};
use crate::models::CategoryFilter;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let api = use_api();

    let select = move |filter: CategoryFilter| {
        ctx.go_back();
        spawn_local(actions::show_bookmarks(api, store, filter));
    };
    let is_current = move |id: i64| store.category().get().id == id;

    view! {
        <nav class="sidebar">
            <div class="sidebar-actions">
                <a
                    class="nav-link"
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.show(Content::Category(Mode::Add));
                    }
                >
                    "Add Category"
                </a>
                <a
                    class="nav-link"
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.show(Content::Setting);
                    }
                >
                    "Setting"
                </a>
            </div>
            <ul class="navbar-nav categories">
                <li
                    class="nav-item"
                    class:active=move || is_current(ALL_BOOKMARKS_ID)
                    on:click=move |_| select(CategoryFilter::all())
                >
                    "All Bookmarks"
                </li>
                <For
                    each=move || store.categories().get()
                    key=|c| (c.id, c.name.clone(), c.count)
                    children=move |category| {
                        let id = category.id;
                        let filter = CategoryFilter::of(&category);
                        view! {
                            <li
                                class="nav-item"
                                class:active=move || is_current(id)
                                on:click=move |_| select(filter.clone())
                            >
                                {format!("{} ({})", category.name, category.count)}
                            </li>
                        }
                    }
                />
            </ul>
        </nav>
    }
}
