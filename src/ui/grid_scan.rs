//! Scan-grid background effect
//!
//! A ray-cast corridor of grid lines with a soft scan band sweeping through
//! it. The view skews toward the pointer. Bloom and chromatic aberration are
//! applied in the same pass when post-processing is enabled.

use leptos::html;
use leptos::prelude::*;

use crate::core::GridScanParams;

pub const GRID_SCAN_FRAGMENT: &str = r#"#version 300 es
precision highp float;

uniform vec3 iResolution;
uniform float iTime;
uniform vec2 uSkew;
uniform float uTilt;
uniform float uYaw;
uniform float uLineThickness;
uniform vec3 uLinesColor;
uniform vec3 uScanColor;
uniform float uGridScale;
uniform float uScanOpacity;
uniform float uNoise;
uniform float uBloom;
uniform float uChromatic;
uniform float uScanGlow;
uniform float uScanSoftness;
uniform float uScanDuration;
uniform float uScanDelay;

in vec2 vUv;
out vec4 fragColor;

vec4 corridor(vec2 fragCoord) {
    vec2 p = (2.0 * fragCoord - iResolution.xy) / iResolution.y;
    vec3 ro = vec3(0.0);
    vec3 rd = normalize(vec3(p, 2.0));

    float cR = cos(uTilt), sR = sin(uTilt);
    rd.xy = mat2(cR, -sR, sR, cR) * rd.xy;

    float cY = cos(uYaw), sY = sin(uYaw);
    rd.xz = mat2(cY, -sY, sY, cY) * rd.xz;

    vec2 skew = clamp(uSkew, vec2(-0.7), vec2(0.7));
    rd.xy += skew * rd.z;

    float minT = 1e20;
    float gridScale = max(1e-5, uGridScale);
    vec2 gridUV = vec2(0.0);

    // Two horizontal planes (floor/ceiling) and two vertical walls
    for (int i = 0; i < 4; i++) {
        float isY = float(i < 2);
        float pos = mix(-0.2, 0.2, float(i)) * isY + mix(-0.5, 0.5, float(i - 2)) * (1.0 - isY);
        float num = pos - (isY * ro.y + (1.0 - isY) * ro.x);
        float den = isY * rd.y + (1.0 - isY) * rd.x;
        float t = num / den;
        vec3 h = ro + rd * t;

        float depthBoost = smoothstep(0.0, 3.0, h.z);
        h.xy += skew * 0.15 * depthBoost;

        bool use = t > 0.0 && t < minT;
        gridUV = use ? mix(h.zy, h.xz, isY) / gridScale : gridUV;
        minT = use ? t : minT;
    }

    vec3 hit = ro + rd * minT;
    float dist = length(hit - ro);

    float fx = fract(gridUV.x);
    float fy = fract(gridUV.y);
    float ax = min(fx, 1.0 - fx);
    float ay = min(fy, 1.0 - fy);
    float wx = fwidth(gridUV.x);
    float wy = fwidth(gridUV.y);
    float halfPx = max(0.0, uLineThickness) * 0.5;

    float lineX = 1.0 - smoothstep(halfPx * wx, halfPx * wx + wx, ax);
    float lineY = 1.0 - smoothstep(halfPx * wy, halfPx * wy + wy, ay);
    float lineMask = max(lineX, lineY);

    float fade = exp(-dist * 2.0);

    float dur = max(0.05, uScanDuration);
    float del = max(0.0, uScanDelay);
    float sigma = max(0.001, 0.18 * max(0.1, uScanGlow) * uScanSoftness);

    float t2 = mod(max(0.0, iTime - del), 2.0 * dur);
    float phase = (t2 < dur) ? (t2 / dur) : (1.0 - (t2 - dur) / dur);

    float dz = abs(hit.z - phase * 2.0);
    float band = exp(-0.5 * (dz * dz) / (sigma * sigma));
    float pulse = band * clamp(uScanOpacity, 0.0, 1.0);

    vec3 color = uLinesColor * lineMask * fade + uScanColor * pulse;
    float alpha = clamp(max(lineMask, pulse), 0.0, 1.0);
    return vec4(color, alpha);
}

void main() {
    vec2 fragCoord = vUv * iResolution.xy;
    vec4 base = corridor(fragCoord);

    if (uChromatic > 0.0) {
        vec2 dir = vUv - 0.5;
        vec2 offset = dir * length(dir) * 2.0 * uChromatic * iResolution.xy;
        base.r = corridor(fragCoord + offset).r;
        base.b = corridor(fragCoord - offset).b;
    }

    float lum = dot(base.rgb, vec3(0.2126, 0.7152, 0.0722));
    base.rgb += base.rgb * lum * uBloom * 2.0;

    float n = fract(sin(dot(gl_FragCoord.xy + vec2(iTime * 123.4), vec2(12.9898, 78.233))) * 43758.5453123);
    base.rgb += (n - 0.5) * uNoise;

    fragColor = clamp(base, 0.0, 1.0);
}
"#;

/// Full-size scan-grid canvas; children are layered on top of it
#[component]
pub fn GridScan(
    /// Effect tuning
    #[prop(optional)]
    params: GridScanParams,
    /// Extra classes on the container
    #[prop(default = "")]
    class: &'static str,
    /// Overlay content
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        use leptos::ev;
        use leptos::logging::warn;

        use crate::core::{LookConfig, LookState, Vec2, pointer_to_ndc};
        use crate::ui::webgl::{RafLoop, ResizeFlag, ShaderSurface, run_loop};

        let frames = StoredValue::new_local(None::<RafLoop>);
        let resize = ResizeFlag::default();
        let pointer = Rc::new(Cell::new(Vec2::ZERO));
        let look_config = LookConfig::from_sensitivity(params.sensitivity);
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
                    pointer.set(pointer_to_ndc(
                        e.client_x() as f64,
                        e.client_y() as f64,
                        rect.left(),
                        rect.top(),
                        rect.width(),
                        rect.height(),
                    ));
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
                    warn!("grid scan disabled: {err}");
                    return;
                }
            };

            let surface = match ShaderSurface::new(canvas, GRID_SCAN_FRAGMENT) {
                Ok(surface) => surface,
                Err(err) => {
                    warn!("grid scan disabled: {err}");
                    return;
                }
            };

            surface.use_program();
            surface.set_f32("uTilt", 0.0);
            surface.set_f32("uYaw", 0.0);
            surface.set_f32("uLineThickness", u.line_thickness);
            surface.set_vec3("uLinesColor", u.lines_color);
            surface.set_vec3("uScanColor", u.scan_color);
            surface.set_f32("uGridScale", u.grid_scale);
            surface.set_f32("uScanOpacity", u.scan_opacity);
            surface.set_f32("uNoise", u.noise);
            surface.set_f32("uBloom", u.bloom);
            surface.set_f32("uChromatic", u.chromatic);
            surface.set_f32("uScanGlow", u.scan_glow);
            surface.set_f32("uScanSoftness", u.scan_softness);
            surface.set_f32("uScanDuration", u.scan_duration);
            surface.set_f32("uScanDelay", u.scan_delay);

            let pointer = pointer.clone();
            let mut look = LookState::default();
            let raf = run_loop(
                surface,
                resize.clone(),
                move |surface, frame| {
                    look.set_target(pointer.get());
                    let skew = look.step(&look_config, frame.dt);
                    surface.set_vec3("iResolution", surface.resolution().uniform());
                    surface.set_f32("iTime", frame.time as f32);
                    surface.set_vec2("uSkew", [skew.x as f32, skew.y as f32]);
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
        <div class=format!("gridscan {}", class)>
            <canvas node_ref=canvas_ref class="gridscan__canvas"></canvas>
            {children.map(|c| c())}
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
            "uSkew",
            "uTilt",
            "uYaw",
            "uLineThickness",
            "uLinesColor",
            "uScanColor",
            "uGridScale",
            "uScanOpacity",
            "uNoise",
            "uBloom",
            "uChromatic",
            "uScanGlow",
            "uScanSoftness",
            "uScanDuration",
            "uScanDelay",
        ] {
            assert!(
                GRID_SCAN_FRAGMENT.contains(&format!(" {name};")),
                "missing uniform {name}"
            );
        }
    }

    #[test]
    fn test_fragment_targets_webgl2() {
        assert!(GRID_SCAN_FRAGMENT.starts_with("#version 300 es"));
        assert!(GRID_SCAN_FRAGMENT.contains("out vec4 fragColor;"));
    }

    #[test]
    fn test_fragment_sweep_matches_scan_phase() {
        // Same ping-pong as crate::core::scan_phase
        assert!(GRID_SCAN_FRAGMENT.contains("mod(max(0.0, iTime - del), 2.0 * dur)"));
        assert!(GRID_SCAN_FRAGMENT.contains("(t2 < dur) ? (t2 / dur) : (1.0 - (t2 - dur) / dur)"));
        assert!(GRID_SCAN_FRAGMENT.contains("max(0.05, uScanDuration)"));
    }
}
