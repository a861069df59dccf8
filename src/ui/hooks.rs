//! Scroll-position hooks shared by the page sections
//!
//! Both hooks measure the referenced element on every window scroll and
//! resize and feed the numbers through the pure mapping in `core::scroll`.

use leptos::html;
use leptos::prelude::*;

use crate::core::ScrollRange;

/// Margin used by sections that reveal on entry
pub const REVEAL_MARGIN_PX: f64 = 100.0;

#[cfg(not(feature = "ssr"))]
fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Re-run `measure` on every scroll and resize until the owner is cleaned up
#[cfg(not(feature = "ssr"))]
fn on_scroll_or_resize(measure: impl Fn() + Clone + 'static) {
    use leptos::ev;

    let on_scroll = {
        let measure = measure.clone();
        window_event_listener(ev::scroll, move |_| measure())
    };
    let on_resize = {
        let measure = measure.clone();
        window_event_listener(ev::resize, move |_| measure())
    };

    // First measurement once the node is mounted
    Effect::new(move |_| measure());

    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });
}

/// Progress of `node` through `range`, in `[0, 1]`
pub fn use_scroll_progress(node: NodeRef<html::Div>, range: ScrollRange) -> ReadSignal<f64> {
    let (progress, set_progress) = signal(0.0);

    #[cfg(not(feature = "ssr"))]
    on_scroll_or_resize(move || {
        let Some(el) = node.get() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let next = range.progress(rect.top(), rect.height(), viewport_height());
        if next != progress.get_untracked() {
            set_progress.set(next);
        }
    });

    #[cfg(feature = "ssr")]
    let _ = (node, range, set_progress);

    progress
}

/// Whether `node` is inside the viewport. With `once`, stays true after the
/// first time it enters.
pub fn use_in_view(node: NodeRef<html::Div>, once: bool) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);

    #[cfg(not(feature = "ssr"))]
    on_scroll_or_resize(move || {
        if once && visible.get_untracked() {
            return;
        }
        let Some(el) = node.get() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let next = crate::core::in_view(
            rect.top(),
            rect.bottom(),
            viewport_height(),
            REVEAL_MARGIN_PX,
        );
        if next != visible.get_untracked() {
            set_visible.set(next);
        }
    });

    #[cfg(feature = "ssr")]
    let _ = (node, once, set_visible);

    visible
}
