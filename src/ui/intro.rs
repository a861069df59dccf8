//! Timed overlays shown before the main page: the branded intro image and
//! the scan-grid transition that follows it.

use leptos::prelude::*;

use crate::core::{COLLECTIVE_TAGLINE, GridScanParams, INTRO_IMAGE, OverlayPhase, OverlaySchedule};
use crate::ui::grid_scan::GridScan;

/// Run `f` after `ms`. The caller clears the handle on cleanup.
#[cfg(not(feature = "ssr"))]
fn after(ms: u32, f: impl FnOnce() + 'static) -> Option<TimeoutHandle> {
    use std::time::Duration;

    match set_timeout_with_handle(f, Duration::from_millis(ms as u64)) {
        Ok(handle) => Some(handle),
        Err(err) => {
            leptos::logging::warn!("failed to schedule overlay timer: {err:?}");
            None
        }
    }
}

/// Full-screen intro image. Fades out after the display period and calls
/// `on_complete` once the fade has finished.
#[component]
pub fn IntroAnimation(on_complete: Callback<()>) -> impl IntoView {
    let schedule = OverlaySchedule::intro();
    let (phase, set_phase) = signal(OverlayPhase::Showing);

    #[cfg(not(feature = "ssr"))]
    {
        leptos::logging::log!("intro mounted");

        let dismiss = after(schedule.dismiss_at(), move || {
            set_phase.set(OverlayPhase::Dismissing);
        });
        let complete = after(schedule.complete_at(), move || {
            set_phase.set(OverlayPhase::Complete);
            on_complete.run(());
        });

        on_cleanup(move || {
            dismiss.into_iter().chain(complete).for_each(|h| h.clear());
        });
    }

    #[cfg(feature = "ssr")]
    let _ = (set_phase, on_complete);

    view! {
        <div class="stage-overlay">
            <Show when=move || phase.get() != OverlayPhase::Complete>
                <div
                    class=move || {
                        if phase.get() == OverlayPhase::Dismissing {
                            "intro-image intro-image-exit"
                        } else {
                            "intro-image"
                        }
                    }
                    style=format!("transition-duration: {}ms", schedule.fade_ms)
                >
                    <img src=INTRO_IMAGE.src alt=INTRO_IMAGE.alt draggable=false/>
                </div>
            </Show>
        </div>
    }
}

/// Scan-grid interlude between the intro and the main page
#[component]
pub fn ScanTransition(on_complete: Callback<()>) -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::GRIDSCAN_TRANSITION_MS;

        let done = after(GRIDSCAN_TRANSITION_MS, move || on_complete.run(()));
        on_cleanup(move || {
            if let Some(handle) = done {
                handle.clear();
            }
        });
    }

    #[cfg(feature = "ssr")]
    let _ = on_complete;

    view! {
        <div class="stage-overlay">
            <GridScan params=GridScanParams::default() class="absolute inset-0">
                <div class="gridscan-caption">
                    <p>{COLLECTIVE_TAGLINE}</p>
                </div>
            </GridScan>
        </div>
    }
}
