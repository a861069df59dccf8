use leptos::prelude::*;

/// Full-width page section with the shared vertical rhythm
#[component]
pub fn Section(
    /// Anchor id for in-page links
    #[prop(optional)]
    id: Option<&'static str>,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=format!("section {}", class)>
            {children()}
        </section>
    }
}
