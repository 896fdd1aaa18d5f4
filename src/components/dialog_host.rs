//! Dialog Host Component
//!
//! Renders the active alert/confirmation dialog over the page.

use leptos::html;
use leptos::prelude::*;

use crate::dialog::use_dialogs;

/// Modal overlay for whatever `Dialogs` currently shows
#[component]
pub fn DialogHost() -> impl IntoView {
    let dialogs = use_dialogs();
    let confirm_ref = NodeRef::<html::Button>::new();
    let cancel_ref = NodeRef::<html::Button>::new();

    // Confirmations focus Cancel so Enter never deletes by accident
    Effect::new(move |_| {
        let Some(spec) = dialogs.active().get() else {
            return;
        };
        let target = if spec.cancel_label.is_some() {
            cancel_ref.get()
        } else {
            confirm_ref.get()
        };
        if let Some(button) = target {
            if let Err(e) = button.focus() {
                log::debug!("focusing dialog button failed: {:?}", e);
            }
        }
    });

    view! {
        {move || dialogs.active().get().map(|spec| {
            let cancel = spec.cancel_label.map(|label| view! {
                <button
                    class="swal btn btn-primary"
                    node_ref=cancel_ref
                    on:click=move |_| dialogs.resolve(false)
                >
                    {label}
                </button>
            });
            view! {
                <div class="swal-backdrop">
                    <div class="swal-popup" role="dialog" aria-modal="true">
                        <div class=spec.icon.class()>{spec.icon.glyph()}</div>
                        <h2 class="swal-title">{spec.title}</h2>
                        <div class="swal-content">{spec.text}</div>
                        <div class="swal-actions">
                            <button
                                class=spec.confirm_class
                                node_ref=confirm_ref
                                on:click=move |_| dialogs.resolve(true)
                            >
                                {spec.confirm_label}
                            </button>
                            {cancel}
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
