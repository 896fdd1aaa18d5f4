//! Category Form Component
//!
//! Add or rename a category, or delete the current one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::{self, use_api};
use crate::components::FormField;
use crate::config::CATEGORY_MAX_LEN;
use crate::context::{AppContext, Mode};
use crate::dialog::use_dialogs;
use crate::models::{CategoryFilter, Outcome};
use crate::store::{self, use_app_store, AppStateStoreFields};
use crate::validate::{self, CATEGORY_NAME};

/// Error code for which the server blames the name field
const NAME_ERROR: i32 = 1;

/// Whether a rejection with `code` should empty the name input
pub fn clears_name(code: i32) -> bool {
    code == NAME_ERROR
}

#[component]
pub fn CategoryForm(mode: Mode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let api = use_api();
    let dialogs = use_dialogs();

    let name = RwSignal::new(String::new());
    let (validated, set_validated) = signal(false);

    // Follow the current category while the form is open
    Effect::new(move |_| {
        let current = store.category().get();
        name.set(match mode {
            Mode::Edit => current.name,
            Mode::Add => String::new(),
        });
    });

    let name_invalid = Signal::derive(move || {
        validated.get() && validate::check(name.get().trim(), &CATEGORY_NAME).is_err()
    });
    let name_feedback = Signal::derive(move || validate::feedback(name.get().trim(), &CATEGORY_NAME));

    let save = move || {
        let value = name.get_untracked().trim().to_string();
        if !validate::all_valid(&[(value.as_str(), CATEGORY_NAME)]) {
            set_validated.set(true);
            return;
        }
        set_validated.set(false);
        let id = store.category().get_untracked().id;

        spawn_local(async move {
            let result = match mode {
                Mode::Add => api::add_category(api, &value).await,
                Mode::Edit => api::edit_category(api, id, &value).await,
            };
            match result {
                Ok(Outcome::Done) => {
                    log::info!("{} category {}", mode.label(), value);
                    ctx.go_back();
                    match mode {
                        Mode::Add => {
                            let _ = actions::refresh_categories(api, store).await;
                        }
                        Mode::Edit => store::store_rename_category(&store, &value),
                    }
                }
                Ok(Outcome::Rejected { message, code }) => {
                    dialogs.error(&message).await;
                    if clears_name(code) {
                        name.set(String::new());
                    }
                }
                Err(e) => dialogs.report(&e).await,
            }
        });
    };

    let delete = move |_| {
        let id = store.category().get_untracked().id;
        spawn_local(async move {
            let Some(result) = dialogs.guard_delete("category", api::delete_category(api, id)).await else {
                return;
            };
            match result {
                Ok(()) => {
                    log::info!("deleted category {}", id);
                    store::store_remove_category(&store, id);
                    ctx.go_back();
                    actions::show_bookmarks(api, store, CategoryFilter::all()).await;
                    let _ = actions::refresh_categories(api, store).await;
                }
                Err(e) => dialogs.report(&e).await,
            }
        });
    };

    view! {
        <div on:keyup=move |ev| if ev.key() == "Enter" { save() }>
            <header style="padding-left: 20px">
                <h3>{mode.label()} " Category"</h3>
                <hr />
            </header>
            <div class="form" class:was-validated=move || validated.get()>
                <FormField
                    id="category"
                    label="Category"
                    value=name
                    invalid=name_invalid
                    max_len=CATEGORY_MAX_LEN
                    feedback=name_feedback
                    help="Max length: 15 characters. One chinese character equal three characters."
                />
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
    fn test_clears_name_only_for_name_errors() {
        assert!(clears_name(1));
        assert!(!clears_name(0));
        assert!(!clears_name(2));
    }
}
