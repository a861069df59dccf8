//! "This is Punchline" introduction with parallax feature cards

use leptos::html;
use leptos::prelude::*;

use crate::core::{CATCHPHRASES, FEATURE_CARDS, HOME_MIC_IMAGE, ScrollRange, interpolate};
use crate::ui::hooks::{use_in_view, use_scroll_progress};
use crate::ui::icon::{Icon, icons};

/// Catchphrase grid grows to full size mid-section and shrinks again
const PHRASE_SCALE_INPUT: [f64; 3] = [0.0, 0.5, 1.0];
const PHRASE_SCALE_OUTPUT: [f64; 3] = [0.8, 1.0, 0.8];

fn reveal_class(base: &str, shown: bool) -> String {
    if shown {
        format!("{base} reveal reveal-shown")
    } else {
        format!("{base} reveal")
    }
}

#[component]
pub fn HomeSection() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let header = NodeRef::<html::Div>::new();
    let phrases = NodeRef::<html::Div>::new();
    let cta = NodeRef::<html::Div>::new();

    let progress = use_scroll_progress(container, ScrollRange::Traverse);
    let header_shown = use_in_view(header, true);
    let phrases_shown = use_in_view(phrases, true);
    let cta_shown = use_in_view(cta, true);

    let phrase_scale =
        move || interpolate(progress.get(), &PHRASE_SCALE_INPUT, &PHRASE_SCALE_OUTPUT);

    view! {
        <section class="home-section">
            <div node_ref=container class="home-inner">
                <div class="home-backdrop"></div>
                <div class="home-grid-pattern"></div>

                <div class="container">
                    <div node_ref=header class=move || reveal_class("home-header", header_shown.get())>
                        <div class="home-header-mic">
                            <img src=HOME_MIC_IMAGE.src alt=HOME_MIC_IMAGE.alt/>
                        </div>
                        <h2 class="home-title">
                            "THIS IS " <span class="text-gradient">"PUNCHLINE"</span>
                        </h2>
                        <p class="home-lead">
                            "Where the mic is hot, the drinks are cold, and nobody is safe from the punchline."
                        </p>
                    </div>

                    <div class="feature-grid">
                        {FEATURE_CARDS
                            .into_iter()
                            .map(|card| {
                                let offset = move || {
                                    interpolate(progress.get(), &[0.0, 1.0], &card.track.range())
                                };
                                view! {
                                    <div
                                        class="feature-card"
                                        style=move || format!("transform: translateY({}px)", offset())
                                    >
                                        <div class="feature-card-image">
                                            <img src=card.picture.src alt=card.picture.alt/>
                                        </div>
                                        <div class="feature-card-shade"></div>
                                        <div class="feature-card-text">
                                            <h3>{card.title}</h3>
                                            <p>{card.tagline}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div
                        node_ref=phrases
                        class="phrase-grid"
                        style=move || format!("transform: scale({})", phrase_scale())
                    >
                        {CATCHPHRASES
                            .into_iter()
                            .enumerate()
                            .map(|(index, phrase)| {
                                let side = if index % 2 == 0 { "from-left" } else { "from-right" };
                                view! {
                                    <div
                                        class=move || {
                                            if phrases_shown.get() {
                                                format!("phrase-card {side} reveal-shown")
                                            } else {
                                                format!("phrase-card {side}")
                                            }
                                        }
                                        style=format!("transition-delay: {}ms", index * 200)
                                    >
                                        <div
                                            class="phrase-glow"
                                            style=format!(
                                                "background: linear-gradient(135deg, {}, {})",
                                                phrase.from,
                                                phrase.to,
                                            )
                                        ></div>
                                        <h4>{phrase.text}</h4>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div node_ref=cta class=move || reveal_class("home-cta", cta_shown.get())>
                        <a class="btn-riot" href="#book">
                            "Experience The Underground"
                            <Icon name=icons::ARROW_RIGHT class="icon-text"/>
                        </a>
                        <p class="home-cta-note">"No suits. No scripts. Just pure comedy chaos."</p>
                    </div>
                </div>

                <div class="floating floating-top" aria-hidden="true">"😂"</div>
                <div class="floating floating-bottom" aria-hidden="true">"🎤"</div>
            </div>
        </section>
    }
}
