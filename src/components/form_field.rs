//! Form Field Component
//!
//! Bootstrap form group: label, bound input, invalid feedback and help text.

use leptos::prelude::*;

/// Labelled text input bound to `value`
///
/// `invalid` marks the input with `is-invalid`; the form decides when that
/// applies (only after a failed submit).
#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] invalid: Signal<bool>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] max_len: Option<usize>,
    #[prop(default = true)] required: bool,
    #[prop(optional, into)] feedback: Option<Signal<String>>,
    #[prop(optional)] help: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                class="form-control"
                class:is-invalid=move || invalid.get()
                type=input_type
                id=id
                maxlength=max_len.map(|n| n.to_string())
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {feedback.map(|text| view! { <div class="invalid-feedback">{move || text.get()}</div> })}
            {help.map(|text| view! { <small class="form-text text-muted">{text}</small> })}
        </div>
    }
}
