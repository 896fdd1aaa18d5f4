//! Bookmark Form Component
//!
//! Add or edit a bookmark, or delete the selected one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::{self, use_api, BookmarkBody};
use crate::components::FormField;
use crate::config::{BOOKMARK_MAX_LEN, CATEGORY_MAX_LEN};
use crate::context::{AppContext, Mode};
use crate::dialog::use_dialogs;
use crate::models::Outcome;
use crate::store::{self, use_app_store, AppStateStoreFields};
use crate::validate::{self, BOOKMARK_CATEGORY, BOOKMARK_NAME, BOOKMARK_URL};

/// Input the server blamed for a rejected save
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BookmarkField {
    Name,
    Url,
}

/// Map a rejection code to the input that should be emptied
pub fn field_for_error(code: i32) -> Option<BookmarkField> {
    match code {
        1 => Some(BookmarkField::Name),
        2 => Some(BookmarkField::Url),
        _ => None,
    }
}

#[component]
pub fn BookmarkForm(mode: Mode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let api = use_api();
    let dialogs = use_dialogs();

    let selected = store.bookmark().get_untracked();
    let filter = store.category().get_untracked();
    let (initial_category, id) = match mode {
        Mode::Edit => (selected.category.clone(), selected.id),
        Mode::Add if filter.is_real() => (filter.name.clone(), 0),
        Mode::Add => (String::new(), 0),
    };
    let (initial_name, initial_url) = match mode {
        Mode::Edit => (selected.name, selected.url),
        Mode::Add => (String::new(), String::new()),
    };

    let name = RwSignal::new(initial_name);
    let url = RwSignal::new(initial_url);
    let category = RwSignal::new(initial_category);
    let (validated, set_validated) = signal(false);

    let invalid = move |value: RwSignal<String>, rule: validate::Rule| {
        Signal::derive(move || validated.get() && validate::check(value.get().trim(), &rule).is_err())
    };
    let name_invalid = invalid(name, BOOKMARK_NAME);
    let url_invalid = invalid(url, BOOKMARK_URL);
    let category_invalid = invalid(category, BOOKMARK_CATEGORY);
    let name_feedback = Signal::derive(move || validate::feedback(name.get().trim(), &BOOKMARK_NAME));

    let normalize = move || url.update(|u| *u = validate::normalize_url(u.trim()));

    let save = move || {
        normalize();
        let name_value = name.get_untracked().trim().to_string();
        let url_value = url.get_untracked();
        let category_value = category.get_untracked().trim().to_string();
        if !validate::all_valid(&[
            (name_value.as_str(), BOOKMARK_NAME),
            (url_value.as_str(), BOOKMARK_URL),
            (category_value.as_str(), BOOKMARK_CATEGORY),
        ]) {
            set_validated.set(true);
            return;
        }
        set_validated.set(false);

        spawn_local(async move {
            let body = BookmarkBody {
                name: &name_value,
                url: &url_value,
                category: &category_value,
            };
            let result = match mode {
                Mode::Add => api::add_bookmark(api, &body).await,
                Mode::Edit => api::edit_bookmark(api, id, &body).await,
            };
            match result {
                Ok(Outcome::Done) => {
                    log::info!("{} bookmark {}", mode.label(), name_value);
                    ctx.go_back();
                    actions::reload_bookmarks(api, store).await;
                    // Saving may have created the category on the server
                    let _ = actions::refresh_categories(api, store).await;
                }
                Ok(Outcome::Rejected { message, code }) => {
                    dialogs.error(&message).await;
                    match field_for_error(code) {
                        Some(BookmarkField::Name) => name.set(String::new()),
                        Some(BookmarkField::Url) => url.set(String::new()),
                        None => {}
                    }
                }
                Err(e) => dialogs.report(&e).await,
            }
        });
    };

    let delete = move |_| {
        let bookmark = store.bookmark().get_untracked();
        spawn_local(async move {
            let Some(result) = dialogs.guard_delete("bookmark", api::delete_bookmark(api, bookmark.id)).await else {
                return;
            };
            match result {
                Ok(()) => {
                    log::info!("deleted bookmark {}", bookmark.id);
                    ctx.go_back();
                    store::store_remove_bookmark(&store, &bookmark);
                }
                Err(e) => dialogs.report(&e).await,
            }
        });
    };

    let suggestions = move || {
        store
            .categories()
            .get()
            .into_iter()
            .filter(|c| c.id > 0)
            .collect::<Vec<_>>()
    };

    view! {
        <div on:keyup=move |ev| if ev.key() == "Enter" { save() }>
            <header style="padding-left: 20px">
                <h3>{mode.label()} " Bookmark"</h3>
                <hr />
            </header>
            <div class="form" class:was-validated=move || validated.get()>
                <FormField
                    id="bookmark"
                    label="Bookmark"
                    value=name
                    invalid=name_invalid
                    max_len=BOOKMARK_MAX_LEN
                    feedback=name_feedback
                    help="Max length: 40 characters."
                />
                <div class="form-group">
                    <label for="url">"URL"</label>
                    <input
                        class="form-control"
                        class:is-invalid=move || url_invalid.get()
                        type="url"
                        id="url"
                        required=true
                        prop:value=move || url.get()
                        on:input=move |ev| url.set(event_target_value(&ev))
                        on:blur=move |_| normalize()
                    />
                    <div class="invalid-feedback">{move || validate::feedback(url.get().trim(), &BOOKMARK_URL)}</div>
                </div>
                <div class="form-group">
                    <label for="category">"Category"</label>
                    <input
                        class="form-control"
                        class:is-invalid=move || category_invalid.get()
                        list="category-list"
                        id="category"
                        maxlength=CATEGORY_MAX_LEN.to_string()
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                    <div class="invalid-feedback">{move || validate::feedback(category.get().trim(), &BOOKMARK_CATEGORY)}</div>
                    <datalist id="category-list">
                        <For
                            each=suggestions
                            key=|c| (c.id, c.name.clone())
                            children=move |c| view! { <option>{c.name}</option> }
                        />
                    </datalist>
                    <small class="form-text text-muted">
                        "Max length: 15 characters. One chinese character equal three characters."
                    </small>
                </div>
                <button class="btn btn-primary" on:click=move |_| save()>{mode.label()}</button>
                <button class="btn btn-primary" on:click=move |_| ctx.go_back()>"Cancel"</button>
            </div>
            {(mode == Mode::Edit).then(|| view! {
                <div class="form">
                    <button class="btn btn-danger delete" on:click=delete>"Delete"</button>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_for_error() {
        assert_eq!(field_for_error(1), Some(BookmarkField::Name));
        assert_eq!(field_for_error(2), Some(BookmarkField::Url));
        assert_eq!(field_for_error(0), None);
        assert_eq!(field_for_error(3), None);
    }
}
