//! Setting Form Component
//!
//! Password change.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, redirect, use_api, PasswordChange};
use crate::components::FormField;
use crate::config::{LOGIN_PATH, PASSWORD_MAX_LEN};
use crate::context::AppContext;
use crate::dialog::{use_dialogs, Icon};
use crate::models::Outcome;
use crate::validate::{self, PASSWORD};

/// Which inputs a rejected change empties
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PasswordReset {
    /// The current password was wrong
    Current,
    /// The new passwords were refused
    New,
}

pub fn reset_for_error(code: i32) -> PasswordReset {
    if code == 1 {
        PasswordReset::Current
    } else {
        PasswordReset::New
    }
}

#[component]
pub fn SettingForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = use_api();
    let dialogs = use_dialogs();

    let password = RwSignal::new(String::new());
    let password1 = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());
    let (validated, set_validated) = signal(false);

    let invalid = move |value: RwSignal<String>| {
        Signal::derive(move || validated.get() && validate::check(&value.get(), &PASSWORD).is_err())
    };
    let feedback = move |value: RwSignal<String>| Signal::derive(move || validate::feedback(&value.get(), &PASSWORD));

    let change = move |_| {
        let current = password.get_untracked();
        let new = password1.get_untracked();
        let confirm = password2.get_untracked();
        if !validate::all_valid(&[
            (current.as_str(), PASSWORD),
            (new.as_str(), PASSWORD),
            (confirm.as_str(), PASSWORD),
        ]) {
            set_validated.set(true);
            return;
        }
        set_validated.set(false);

        spawn_local(async move {
            let body = PasswordChange {
                password: &current,
                password1: &new,
                password2: &confirm,
            };
            match api::change_password(api, &body).await {
                Ok(Outcome::Done) => {
                    log::info!("password changed");
                    dialogs
                        .fire("Success", "Your password has changed. Please Re-login!", Icon::Success)
                        .await;
                    redirect(LOGIN_PATH);
                }
                Ok(Outcome::Rejected { message, code }) => {
                    dialogs.error(&message).await;
                    match reset_for_error(code) {
                        PasswordReset::Current => password.set(String::new()),
                        PasswordReset::New => {
                            password1.set(String::new());
                            password2.set(String::new());
                        }
                    }
                }
                Err(e) => dialogs.report(&e).await,
            }
        });
    };

    view! {
        <div>
            <header style="padding-left: 20px">
                <h3>"Setting"</h3>
                <hr />
            </header>
            <div class="form" class:was-validated=move || validated.get()>
                <FormField
                    id="password"
                    label="Current Password"
                    value=password
                    invalid=invalid(password)
                    input_type="password"
                    max_len=PASSWORD_MAX_LEN
                    feedback=feedback(password)
                />
                <FormField
                    id="password1"
                    label="New Password"
                    value=password1
                    invalid=invalid(password1)
                    input_type="password"
                    max_len=PASSWORD_MAX_LEN
                    feedback=feedback(password1)
                />
                <FormField
                    id="password2"
                    label="Confirm Password"
                    value=password2
                    invalid=invalid(password2)
                    input_type="password"
                    max_len=PASSWORD_MAX_LEN
                    feedback=feedback(password2)
                    help="Max password length: 20 characters."
                />
                <button class="btn btn-primary" on:click=change>"Change"</button>
                <button class="btn btn-primary" on:click=move |_| ctx.go_back()>"Cancel"</button>
            </div>
        </div>
    }
}
