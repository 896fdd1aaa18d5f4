//! Bookmark List Component
//!
//! Bookmarks of the current category, with entry points into the forms.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::use_api;
use crate::context::{AppContext, Content, Mode};
use crate::models::Bookmark;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BookmarkList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let api = use_api();

    let add_bookmark = move |_| {
        *store.bookmark().write() = Bookmark::default();
        ctx.show(Content::Bookmark(Mode::Add));
    };

    view! {
        <div class="bookmark-list">
            <header style="padding-left: 20px">
                <h3>{move || store.category().get().name}</h3>
                <div class="list-actions">
                    <button class="btn btn-primary" on:click=add_bookmark>"Add Bookmark"</button>
                    <Show when=move || store.category().get().is_real()>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| ctx.show(Content::Category(Mode::Edit))
                        >
                            "Edit Category"
                        </button>
                    </Show>
                </div>
                <hr />
            </header>
            <Show
                when=move || !store.bookmarks().get().is_empty()
                fallback=|| view! { <p class="empty">"No bookmarks."</p> }
            >
                <ul class="list-group">
                    <For
                        each=move || store.bookmarks().get()
                        key=|b| (b.id, b.name.clone(), b.url.clone(), b.category.clone())
                        children=move |bookmark| {
                            let selected = bookmark.clone();
                            view! {
                                <li class="list-group-item">
                                    <a href=bookmark.url target="_blank" rel="noopener noreferrer">
                                        {bookmark.name}
                                    </a>
                                    <small class="text-muted category">{bookmark.category}</small>
                                    <button
                                        class="btn btn-sm btn-outline-primary edit"
                                        on:click=move |_| {
                                            *store.bookmark().write() = selected.clone();
                                            ctx.show(Content::Bookmark(Mode::Edit));
                                        }
                                    >
                                        "Edit"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
            <Show when=move || store.has_more().get()>
                <button
                    class="btn btn-primary more"
                    disabled=move || store.loading().get()
                    on:click=move |_| spawn_local(actions::load_more(api, store))
                >
                    "More"
                </button>
            </Show>
        </div>
    }
}
