//! Pinned photo gallery followed by the collective's story

use leptos::html;
use leptos::prelude::*;

use crate::core::{GALLERY_COPY, GALLERY_IMAGES, ScrollRange, active_index, item_visual};
use crate::ui::hooks::use_scroll_progress;

/// Scroll distance, in viewport heights, that cycles through every image
const GALLERY_PIN_VH: f64 = 100.0;

#[component]
pub fn CardGallery() -> impl IntoView {
    let count = GALLERY_IMAGES.len();
    let range = ScrollRange::Pinned {
        distance_vh: GALLERY_PIN_VH,
    };
    let wrapper = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(wrapper, range);
    let active = Memo::new(move |_| active_index(progress.get(), count));

    view! {
        <div node_ref=wrapper class="gallery-wrap" style=format!("height: {}vh", range.wrapper_height_vh())>
            <div class="gallery-sticky">
                <div class="gallery-stage">
                    {GALLERY_IMAGES
                        .into_iter()
                        .enumerate()
                        .map(|(i, picture)| {
                            view! {
                                <div
                                    class="gallery-item"
                                    style=move || item_visual(i, active.get()).to_style()
                                >
                                    <img src=picture.src alt=picture.alt/>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="gallery-strip">
                    {GALLERY_IMAGES
                        .into_iter()
                        .enumerate()
                        .map(|(i, picture)| {
                            view! {
                                <div
                                    class="gallery-thumb"
                                    class:gallery-thumb-active=move || active.get() == i
                                >
                                    <img src=picture.src alt=""/>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="gallery-counter">
                    {move || format!("{:02} / {:02}", active.get() + 1, count)}
                </p>
            </div>
        </div>

        <section class="content-section">
            <div class="container">
                <h2 class="content-title">
                    "LAUGH RIOT " <span class="text-cyan">"GALLERY"</span>
                </h2>
                {GALLERY_COPY
                    .into_iter()
                    .map(|paragraph| view! { <p class="content-paragraph">{paragraph}</p> })
                    .collect_view()}
            </div>
        </section>
    }
}
