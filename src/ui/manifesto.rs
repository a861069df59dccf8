use leptos::html;
use leptos::prelude::*;

use crate::core::{MANIFESTO_ATTRIBUTION, MANIFESTO_QUOTE, ScrollRange, interpolate};
use crate::ui::hooks::use_scroll_progress;

/// Manifesto headline. The two title blocks slide apart and the quote card
/// tilts as the section scrolls past.
#[component]
pub fn Manifesto() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(container, ScrollRange::Traverse);

    let shift = move |to: f64| interpolate(progress.get(), &[0.0, 1.0], &[0.0, to]);

    view! {
        <section class="manifesto">
            <div node_ref=container class="manifesto-inner">
                <div class="manifesto-noise"></div>

                <div class="container manifesto-body">
                    <h2
                        class="manifesto-title"
                        style=move || format!("transform: translateX({}px)", shift(-200.0))
                    >
                        "We don't just" <br/> <span class="outline-text">"tell jokes."</span>
                    </h2>

                    <h2
                        class="manifesto-title manifesto-right"
                        style=move || format!("transform: translateX({}px)", shift(200.0))
                    >
                        "We start" <br/> <span class="outline-text">"Riots."</span>
                    </h2>

                    <div
                        class="manifesto-quote"
                        style=move || format!("transform: rotate({}deg)", shift(10.0) - 3.0)
                    >
                        <p class="manifesto-quote-text">{MANIFESTO_QUOTE}</p>
                        <p class="manifesto-quote-by">{MANIFESTO_ATTRIBUTION}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
