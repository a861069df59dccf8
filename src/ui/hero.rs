use leptos::prelude::*;

use crate::core::{COLLECTIVE_TAGLINE, LightRaysParams};
use crate::ui::light_rays::LightRays;
use crate::ui::stage_scene::StageScene;

/// First screen of the main page. Headlines and captions enter with
/// staggered CSS animations.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <LightRays params=LightRaysParams::default() class="absolute inset-0"/>

            <StageScene/>

            <div class="hero-content">
                <h1 class="hero-title hero-title-top enter-up">"LAUGH"</h1>
                <h1 class="hero-title hero-title-bottom enter-up" style="animation-delay: 200ms">
                    "RIOT"
                </h1>

                <div class="hero-caption hero-caption-left enter-fade" style="animation-delay: 1000ms">
                    <span>"Est. 2025"</span>
                    <span>{COLLECTIVE_TAGLINE}</span>
                </div>

                <div class="hero-caption hero-caption-right enter-fade" style="animation-delay: 1200ms">
                    <p>"Scroll to Enter"</p>
                    <div class="hero-scroll-line"></div>
                </div>
            </div>
        </div>
    }
}
