use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};

use crate::core::Stage;
use crate::ui::{
    CardGallery, Footer, Hero, HomeSection, IntroAnimation, Lineup, Manifesto, ScanTransition,
    ScrollingSections,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Sections of the main page, in scroll order
#[component]
fn MainContent() -> impl IntoView {
    view! {
        <main class="main-content">
            <Hero/>
            <HomeSection/>
            <ScrollingSections/>
            <Manifesto/>
            <CardGallery/>
            <Lineup/>
            <Footer/>
        </main>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Undecided until the browser has read the session flag, so the server
    // and the first client render agree
    let stage = RwSignal::new(None::<Stage>);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use crate::core::{config, has_seen_intro, initial_stage};
        use crate::ui::storage::BrowserSession;

        let force = config::force_show_intro();
        let seen = has_seen_intro(&BrowserSession::open());
        let first = initial_stage(force, seen);
        leptos::logging::log!("starting at stage {first} (force_show_intro={force}, seen={seen})");
        stage.set(Some(first));
    });

    let on_intro_complete = Callback::new(move |_| {
        leptos::logging::log!("intro complete, starting scan transition");
        stage.set(Some(Stage::GridScan));
    });

    let on_transition_complete = Callback::new(move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::mark_intro_shown;
            use crate::ui::storage::BrowserSession;

            mark_intro_shown(&mut BrowserSession::open());
        }
        leptos::logging::log!("scan transition complete, showing main content");
        stage.set(Some(Stage::Main));
    });

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/laugh-riot.css"/>

        <Title text="Laugh Riot - Underground Comedy Collective"/>
        <Meta name="description" content="Punchline: the underground comedy collective."/>

        <div class="app-root">
            {move || match stage.get() {
                None => view! { <div class="stage-overlay"></div> }.into_any(),
                Some(Stage::Intro) => view! { <IntroAnimation on_complete=on_intro_complete/> }.into_any(),
                Some(Stage::GridScan) => {
                    view! { <ScanTransition on_complete=on_transition_complete/> }.into_any()
                }
                Some(Stage::Main) => view! { <MainContent/> }.into_any(),
            }}
        </div>
    }
}
