use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Inline validation message under a field
#[component]
fn FieldError(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| {
            view! {
                <div class="field-error">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}

/// Labelled single-line input
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Shows an asterisk after the label
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, date)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Validation message, if any
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">
                {label}
                {required.then(|| view! { <span class="field-required">"*"</span> })}
            </label>
            <input
                type=input_type
                class="field-input"
                class:field-invalid=move || error.and_then(|e| e.get()).is_some()
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error/>
        </div>
    }
}

/// Labelled multi-line input
#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 3)]
    rows: u32,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            <textarea
                class="field-input field-textarea"
                class:field-invalid=move || error.and_then(|e| e.get()).is_some()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error/>
        </div>
    }
}

/// Labelled dropdown
#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(default = false)] required: bool,
    #[prop(into)] value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">
                {label}
                {required.then(|| view! { <span class="field-required">"*"</span> })}
            </label>
            <select
                class="field-input"
                class:field-invalid=move || error.and_then(|e| e.get()).is_some()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(val, text)| view! { <option value=val>{text}</option> })
                    .collect_view()}
            </select>
            <FieldError error=error/>
        </div>
    }
}
