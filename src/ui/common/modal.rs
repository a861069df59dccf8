use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Centered dialog over a dimmed backdrop
#[component]
pub fn BaseModal(
    /// Modal title
    title: &'static str,
    /// Optional line under the title
    #[prop(optional)]
    subtitle: Option<&'static str>,
    /// Whether modal is open
    #[prop(into)]
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Whether clicking backdrop closes modal
    #[prop(default = true)]
    close_on_backdrop: bool,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    view! {
        <div
            class=move || {
                if is_open.get() { "modal-backdrop" } else { "modal-backdrop modal-hidden" }
            }
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                if close_on_backdrop {
                    #[cfg(not(feature = "ssr"))]
                    {
                        if let Some(target) = e.target()
                            && let Some(element) = target.dyn_ref::<web_sys::Element>()
                            && element.class_list().contains("modal-backdrop")
                        {
                            on_close.run(());
                        }
                    }
                    #[cfg(feature = "ssr")]
                    {
                        let _ = e;
                    }
                }
            }
        >
            <div class="modal-card">
                <div class="modal-header">
                    <div>
                        <h3 class="modal-title">{title}</h3>
                        {subtitle.map(|s| view! { <p class="modal-subtitle">{s}</p> })}
                    </div>
                    <button
                        type="button"
                        class="btn-icon"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close dialog"
                    >
                        <Icon name=icons::X class="icon-standalone"/>
                    </button>
                </div>

                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
