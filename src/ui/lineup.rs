use leptos::html;
use leptos::prelude::*;

use crate::core::{Act, LINEUP};
use crate::ui::common::Section;
use crate::ui::hooks::use_in_view;

#[component]
fn ActCard(act: Act, index: usize) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let shown = use_in_view(card, true);
    // Odd cards sit lower to stagger the grid
    let offset = if index % 2 == 1 { " act-card-offset" } else { "" };

    view! {
        <div
            node_ref=card
            class=move || {
                if shown.get() {
                    format!("act-card reveal reveal-shown{offset}")
                } else {
                    format!("act-card reveal{offset}")
                }
            }
            style=format!("transition-delay: {}ms", index * 100)
        >
            <div class="act-image">
                <div class="act-tint"></div>
                <img src=act.picture.src alt=act.picture.alt/>
                <span class="act-date">{act.date}</span>
            </div>
            <div class="act-footer">
                <h3>{act.name}</h3>
                <a class="btn-outline" href="#book">"Tickets"</a>
            </div>
        </div>
    }
}

/// Upcoming shows
#[component]
pub fn Lineup() -> impl IntoView {
    view! {
        <Section id="lineup" class="lineup">
            <div class="lineup-grid-pattern"></div>
            <div class="container">
                <h2 class="lineup-title">
                    "Upcoming " <span class="text-cyan">"Chaos"</span>
                </h2>
                <div class="lineup-grid">
                    {LINEUP
                        .into_iter()
                        .enumerate()
                        .map(|(index, act)| view! { <ActCard act=act index=index/> })
                        .collect_view()}
                </div>
            </div>
        </Section>
    }
}
