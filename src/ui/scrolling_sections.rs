//! Pinned word list: one slide per word, switched by scroll position

use leptos::html;
use leptos::prelude::*;

use crate::core::{SLIDES, ScrollRange, active_index, fill_scale, item_visual, pinned_distance_vh};
use crate::ui::hooks::use_scroll_progress;

#[component]
pub fn ScrollingSections() -> impl IntoView {
    let count = SLIDES.len();
    let range = ScrollRange::Pinned {
        distance_vh: pinned_distance_vh(count),
    };
    let wrapper = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(wrapper, range);
    let active = Memo::new(move |_| active_index(progress.get(), count));

    view! {
        <section class="pin-section">
            <div node_ref=wrapper style=format!("height: {}vh", range.wrapper_height_vh())>
                <div class="pin-sticky">
                    <div class="pin-content">
                        <ul class="pin-list">
                            {SLIDES
                                .into_iter()
                                .enumerate()
                                .map(|(i, slide)| {
                                    view! {
                                        <li class:pin-word-active=move || active.get() == i>
                                            {slide.word}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div
                            class="pin-fill"
                            style=move || {
                                format!("transform: scaleY({})", fill_scale(progress.get(), count))
                            }
                        ></div>
                    </div>

                    <div class="pin-slides">
                        {SLIDES
                            .into_iter()
                            .enumerate()
                            .map(|(i, slide)| {
                                view! {
                                    <div
                                        class="pin-slide"
                                        style=move || item_visual(i, active.get()).to_style()
                                    >
                                        <img src=slide.picture.src alt=slide.picture.alt/>
                                        <p class="pin-slide-text">{slide.tagline}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
        <section class="spacer-section"></section>
    }
}
