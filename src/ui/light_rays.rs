//! Light-ray backdrop behind the hero headline

use leptos::html;
use leptos::prelude::*;

use crate::core::LightRaysParams;

pub const LIGHT_RAYS_FRAGMENT: &str = r#"#version 300 es
precision highp float;

uniform vec3 iResolution;
uniform float iTime;
uniform vec2 uOrigin;
uniform vec2 uDirection;
uniform vec2 uPointer;
uniform vec3 uColor;
uniform float uSpeed;
uniform float uSpread;
uniform float uLength;
uniform float uPointerInfluence;
uniform float uNoise;
uniform float uDistortion;

in vec2 vUv;
out vec4 fragColor;

float hash(vec2 p) {
    return fract(sin(dot(p, vec2(12.9898, 78.233))) * 43758.5453);
}

float rayStrength(vec2 source, vec2 dir, vec2 coord, float seedA, float seedB, float speed) {
    vec2 toCoord = coord - source;
    float dist = length(toCoord);
    vec2 dirNorm = toCoord / max(dist, 1e-4);
    float cosAngle = dot(dirNorm, dir);

    float distorted = cosAngle + uDistortion * sin(iTime * 2.0 + dist * 0.01) * 0.2;
    float spreadFactor = pow(max(distorted, 0.0), 1.0 / max(uSpread, 0.001));

    float maxDist = iResolution.x * uLength;
    float lengthFalloff = clamp((maxDist - dist) / maxDist, 0.0, 1.0);

    float base = clamp(
        (0.45 + 0.15 * sin(distorted * seedA + iTime * speed)) +
        (0.3 + 0.2 * cos(-distorted * seedB + iTime * speed)),
        0.0, 1.0);
    return base * lengthFalloff * spreadFactor;
}

void main() {
    vec2 coord = vec2(vUv.x, 1.0 - vUv.y) * iResolution.xy;
    vec2 source = uOrigin * iResolution.xy;

    vec2 toPointer = uPointer * iResolution.xy - source;
    vec2 dir = normalize(uDirection);
    if (length(toPointer) > 0.0) {
        dir = normalize(mix(dir, normalize(toPointer), uPointerInfluence));
    }

    float r1 = rayStrength(source, dir, coord, 36.2214, 21.11349, 1.5 * uSpeed);
    float r2 = rayStrength(source, dir, coord, 22.3991, 18.0234, 1.1 * uSpeed);
    float intensity = r1 * 0.5 + r2 * 0.4;

    if (uNoise > 0.0) {
        intensity *= 1.0 - uNoise + uNoise * hash(gl_FragCoord.xy + iTime);
    }

    float brightness = 1.0 - coord.y / iResolution.y;
    vec3 color = uColor * intensity * (0.5 + 0.5 * brightness);
    fragColor = vec4(color, clamp(intensity, 0.0, 1.0));
}
"#;

/// Pointer easing per frame
#[cfg(not(feature = "ssr"))]
const POINTER_EASE: f64 = 0.08;

#[component]
pub fn LightRays(
    #[prop(optional)] params: LightRaysParams,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        use leptos::ev;
        use leptos::logging::warn;

        use crate::core::{Vec2, lerp, pointer_to_ndc};
        use crate::ui::webgl::{RafLoop, ResizeFlag, ShaderSurface, run_loop};

        let frames = StoredValue::new_local(None::<RafLoop>);
        let resize = ResizeFlag::default();
        // [0, 1]², y down
        let pointer = Rc::new(Cell::new(Vec2::new(0.5, 0.5)));
        let uniforms = params.uniforms();

        let resize_listener = {
            let resize = resize.clone();
            window_event_listener(ev::resize, move |_| resize.mark())
        };

        let pointer_listener = {
            let pointer = pointer.clone();
            window_event_listener(ev::pointermove, move |e| {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    let rect = canvas.get_bounding_client_rect();
                    let ndc = pointer_to_ndc(
                        e.client_x() as f64,
                        e.client_y() as f64,
                        rect.left(),
                        rect.top(),
                        rect.width(),
                        rect.height(),
                    );
                    pointer.set(Vec2::new((ndc.x + 1.0) / 2.0, (1.0 - ndc.y) / 2.0));
                }
            })
        };

        let started = Rc::new(Cell::new(false));
        Effect::new(move |_| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if started.replace(true) {
                return;
            }

            let u = match &uniforms {
                Ok(u) => *u,
                Err(err) => {
                    warn!("light rays disabled: {err}");
                    return;
                }
            };
            let surface = match ShaderSurface::new(canvas, LIGHT_RAYS_FRAGMENT) {
                Ok(surface) => surface,
                Err(err) => {
                    warn!("light rays disabled: {err}");
                    return;
                }
            };

            surface.use_program();
            surface.set_vec2("uOrigin", u.origin);
            surface.set_vec2("uDirection", u.direction);
            surface.set_vec3("uColor", u.color);
            surface.set_f32("uSpeed", u.speed);
            surface.set_f32("uSpread", u.spread);
            surface.set_f32("uLength", u.length);
            surface.set_f32("uPointerInfluence", u.pointer_influence);
            surface.set_f32("uNoise", u.noise);
            surface.set_f32("uDistortion", u.distortion);

            let pointer = pointer.clone();
            let mut smoothed = Vec2::new(0.5, 0.5);
            let raf = run_loop(
                surface,
                resize.clone(),
                move |surface, frame| {
                    let target = pointer.get();
                    smoothed = Vec2::new(
                        lerp(smoothed.x, target.x, POINTER_EASE),
                        lerp(smoothed.y, target.y, POINTER_EASE),
                    );
                    surface.set_vec3("iResolution", surface.resolution().uniform());
                    surface.set_f32("iTime", frame.time as f32);
                    surface.set_vec2("uPointer", [smoothed.x as f32, smoothed.y as f32]);
                },
            );
            frames.set_value(Some(raf));
        });

        on_cleanup(move || {
            // Dropping the loop cancels the pending frame and frees the GL objects
            drop(frames.try_update_value(Option::take));
            resize_listener.remove();
            pointer_listener.remove();
        });
    }

    #[cfg(feature = "ssr")]
    let _ = params;

    view! {
        <div class=format!("light-rays {}", class)>
            <canvas node_ref=canvas_ref class="light-rays__canvas"></canvas>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_declares_every_uploaded_uniform() {
        for name in [
            "iResolution",
            "iTime",
            "uOrigin",
            "uDirection",
            "uPointer",
            "uColor",
            "uSpeed",
            "uSpread",
            "uLength",
            "uPointerInfluence",
            "uNoise",
            "uDistortion",
        ] {
            assert!(
                LIGHT_RAYS_FRAGMENT.contains(&format!(" {name};")),
                "missing uniform {name}"
            );
        }
    }
}
