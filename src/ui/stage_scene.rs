//! Hero microphone
//!
//! A small CSS-3D scene: the camera eases toward the pointer and the
//! microphone sways on its own. Both transforms come from `core::motion`
//! and are recomputed every animation frame.

use leptos::prelude::*;

use crate::core::{CameraRig, MicPose};

/// On-screen size of one scene unit
const UNIT_PX: f64 = 60.0;

#[component]
pub fn Microphone(#[prop(into)] pose: Signal<String>) -> impl IntoView {
    view! {
        <div class="mic" style=move || format!("transform: {}", pose.get())>
            <div class="mic-head">
                <div class="mic-grille"></div>
                <div class="mic-core"></div>
            </div>
            <div class="mic-ring"></div>
            <div class="mic-body"></div>
        </div>
    }
}

#[component]
pub fn StageScene() -> impl IntoView {
    let (camera, set_camera) = signal(CameraRig::default().to_css());
    let (pose, set_pose) = signal(MicPose::at(0.0).to_css(UNIT_PX));

    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        use leptos::ev;

        use crate::core::{Vec2, pointer_to_ndc};
        use crate::ui::webgl::animate;

        let pointer = Rc::new(Cell::new(Vec2::ZERO));

        // The scene covers the viewport, so the pointer is measured against it
        let pointer_listener = {
            let pointer = pointer.clone();
            window_event_listener(ev::pointermove, move |e| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                pointer.set(pointer_to_ndc(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    0.0,
                    0.0,
                    width,
                    height,
                ));
            })
        };

        let mut rig = CameraRig::default();
        let frames = StoredValue::new_local(Some(animate(move |frame| {
            rig.step(pointer.get());
            set_camera.set(rig.to_css());
            set_pose.set(MicPose::at(frame.time).to_css(UNIT_PX));
        })));

        on_cleanup(move || {
            drop(frames.try_update_value(Option::take));
            pointer_listener.remove();
        });
    }

    #[cfg(feature = "ssr")]
    let _ = (set_camera, set_pose);

    view! {
        <div class="stage-scene">
            <div class="stage-light stage-light-left"></div>
            <div class="stage-light stage-light-right"></div>
            <div class="stage-camera" style=move || format!("transform: {}", camera.get())>
                <Microphone pose=pose/>
            </div>
            <div class="stage-shadow"></div>
        </div>
    }
}
