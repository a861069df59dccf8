//! Seat booking dialog
//!
//! Validation runs on submit only. Errors are shown next to their field and
//! a successful booking swaps the form for an acknowledgement that closes
//! itself after a few seconds.

use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::prelude::*;

use crate::core::{
    BookingAcknowledgement, BookingDraft, BookingError, BookingField, MAX_SEATS, submit,
};
use crate::ui::common::{BaseModal, FormField, SelectField, TextAreaField};
use crate::ui::icon::{Icon, icons};

/// How long the acknowledgement stays up before the dialog closes
#[cfg(not(feature = "ssr"))]
const ACK_DISMISS_MS: u32 = 4000;

#[component]
pub fn BookingModal(#[prop(into)] is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let draft = RwSignal::new(BookingDraft::default());
    let errors = RwSignal::new(Vec::<BookingError>::new());
    let acknowledgement = RwSignal::new(None::<BookingAcknowledgement>);

    let close = Callback::new(move |_: ()| {
        draft.set(BookingDraft::default());
        errors.set(Vec::new());
        acknowledgement.set(None);
        on_close.run(());
    });

    let error_for = move |field: BookingField| {
        Signal::derive(move || {
            errors.with(|errs| {
                errs.iter()
                    .find(|e| e.field() == field)
                    .map(ToString::to_string)
            })
        })
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        match submit(&draft.get_untracked()) {
            Ok(ack) => {
                log!("booking acknowledged: {}", ack.short_reference());
                #[cfg(not(feature = "ssr"))]
                let reference = ack.reference;
                acknowledgement.set(Some(ack));
                draft.set(BookingDraft::default());
                errors.set(Vec::new());

                #[cfg(not(feature = "ssr"))]
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(ACK_DISMISS_MS).await;
                    // Only close if the same booking is still on screen
                    let still_shown = acknowledgement
                        .try_with_untracked(|a| a.as_ref().map(|a| a.reference))
                        .flatten();
                    if still_shown == Some(reference) {
                        close.run(());
                    }
                });
            }
            Err(errs) => {
                log!("booking rejected with {} error(s)", errs.len());
                errors.set(errs);
            }
        }
    };

    let seat_options: Vec<(String, String)> = (1..=MAX_SEATS)
        .map(|n| (n.to_string(), n.to_string()))
        .collect();

    view! {
        <BaseModal
            title="Book a seat"
            subtitle="Reserve your spot for the next riot"
            is_open=is_open
            on_close=close
        >
            <Show
                when=move || acknowledgement.with(Option::is_none)
                fallback=move || {
                    acknowledgement
                        .get()
                        .map(|ack| {
                            view! {
                                <div class="booking-ack">
                                    <Icon name=icons::CHECK class="icon-standalone"/>
                                    <p class="booking-ack-title">"You're on the list!"</p>
                                    <p>{ack.summary()}</p>
                                    <p class="booking-ack-ref">
                                        "Reference " {ack.short_reference()}
                                    </p>
                                </div>
                            }
                        })
                }
            >
                <form class="booking-form" on:submit=on_submit novalidate=true>
                    <FormField
                        label="Name"
                        required=true
                        placeholder="Your stage name works too"
                        value=Signal::derive(move || draft.with(|d| d.name.clone()))
                        on_input=Callback::new(move |v| draft.update(|d| d.name = v))
                        error=error_for(BookingField::Name)
                    />
                    <FormField
                        label="Email"
                        required=true
                        input_type="email"
                        placeholder="you@example.com"
                        value=Signal::derive(move || draft.with(|d| d.email.clone()))
                        on_input=Callback::new(move |v| draft.update(|d| d.email = v))
                        error=error_for(BookingField::Email)
                    />
                    <FormField
                        label="Phone"
                        required=true
                        input_type="tel"
                        placeholder="+1 555 010 0199"
                        value=Signal::derive(move || draft.with(|d| d.phone.clone()))
                        on_input=Callback::new(move |v| draft.update(|d| d.phone = v))
                        error=error_for(BookingField::Phone)
                    />
                    <div class="booking-row">
                        <FormField
                            label="Date"
                            required=true
                            input_type="date"
                            value=Signal::derive(move || draft.with(|d| d.date.clone()))
                            on_input=Callback::new(move |v| draft.update(|d| d.date = v))
                            error=error_for(BookingField::Date)
                        />
                        <SelectField
                            label="Seats"
                            required=true
                            value=Signal::derive(move || draft.with(|d| d.seats.to_string()))
                            on_change=Callback::new(move |v: String| {
                                draft.update(|d| d.seats = v.parse().unwrap_or(0))
                            })
                            options=seat_options.clone()
                            error=error_for(BookingField::Seats)
                        />
                    </div>
                    <TextAreaField
                        label="Message"
                        placeholder="Heckling preferences, dietary needs, dares"
                        value=Signal::derive(move || draft.with(|d| d.message.clone()))
                        on_input=Callback::new(move |v| draft.update(|d| d.message = v))
                        error=error_for(BookingField::Message)
                    />

                    <div class="booking-actions">
                        <button type="button" class="btn-ghost" on:click=move |_| close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-riot">"Book now"</button>
                    </div>
                </form>
            </Show>
        </BaseModal>
    }
}
