use leptos::prelude::*;

use crate::core::SOCIAL_LINKS;
use crate::ui::booking_form::BookingModal;
use crate::ui::icon::{Icon, icons};

/// Page footer. Also the `#book` anchor that in-page ticket links target.
#[component]
pub fn Footer() -> impl IntoView {
    let booking_open = RwSignal::new(false);

    view! {
        <footer id="book" class="footer">
            <div class="container">
                <div class="footer-top">
                    <div>
                        <h2 class="footer-brand">"Punchline"</h2>
                        <p class="footer-blurb">
                            "The city's loudest underground comedy night. Bring friends, bring thick skin."
                        </p>
                    </div>
                    <button type="button" class="btn-dark" on:click=move |_| booking_open.set(true)>
                        <Icon name=icons::MIC class="icon-text"/>
                        "Book a seat"
                    </button>
                </div>

                <nav class="footer-links">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a href=link.href target="_blank" rel="noopener noreferrer">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="footer-rule"></div>

                <div class="footer-bottom">
                    <span>"© 2025 Punchline Comedy"</span>
                    <span>"Made with Chaos"</span>
                </div>
            </div>

            <BookingModal
                is_open=booking_open
                on_close=Callback::new(move |_| booking_open.set(false))
            />
        </footer>
    }
}
