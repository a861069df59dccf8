//! Parameters for the shader-driven background effects
//!
//! [`GridScanParams`] drives the full-screen scan grid shown between the
//! intro and the main page. [`LightRaysParams`] drives the hero backdrop.
//! Both are turned into plain uniform values here so the browser side only
//! has to upload numbers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest device pixel ratio the drawing buffer is rendered at
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Error when parsing a CSS hex color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color must start with '#': {0}")]
    MissingHash(String),
    #[error("color must have 3 or 6 hex digits: {0}")]
    BadLength(String),
    #[error("invalid hex digit in color: {0}")]
    BadDigit(String),
}

/// Linear-or-sRGB color with channels in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (case-insensitive) as sRGB
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(hex.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(hex.to_string()));
        }

        let channel = |s: &str| -> Result<f32, ColorError> {
            u8::from_str_radix(s, 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ColorError::BadDigit(hex.to_string()))
        };

        match digits.len() {
            3 => {
                let expand = |i: usize| digits[i..i + 1].repeat(2);
                Ok(Self::new(
                    channel(&expand(0))?,
                    channel(&expand(1))?,
                    channel(&expand(2))?,
                ))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(ColorError::BadLength(hex.to_string())),
        }
    }

    /// sRGB to linear transfer, per channel
    pub fn to_linear(&self) -> Self {
        fn convert(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        Self::new(convert(self.r), convert(self.g), convert(self.b))
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Drawing-buffer size derived from the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    /// CSS pixels
    pub css_width: f64,
    /// CSS pixels
    pub css_height: f64,
    pub pixel_ratio: f64,
    /// Device pixels
    pub buffer_width: u32,
    /// Device pixels
    pub buffer_height: u32,
}

impl Resolution {
    /// Never fails: negative or NaN sizes collapse to a 1x1 buffer and the
    /// pixel ratio is clamped to `[1, MAX_PIXEL_RATIO]`.
    pub fn from_viewport(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let sanitize = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let css_width = sanitize(width);
        let css_height = sanitize(height);
        let pixel_ratio = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.clamp(1.0, MAX_PIXEL_RATIO)
        } else {
            1.0
        };

        let buffer = |css: f64| ((css * pixel_ratio).round() as u32).max(1);

        Self {
            css_width,
            css_height,
            pixel_ratio,
            buffer_width: buffer(css_width),
            buffer_height: buffer(css_height),
        }
    }

    /// Value for the `iResolution` uniform
    pub fn uniform(&self) -> [f32; 3] {
        [
            self.buffer_width as f32,
            self.buffer_height as f32,
            self.pixel_ratio as f32,
        ]
    }
}

/// Ping-pong sweep position of the scan band in `[0, 1]`.
///
/// Holds at 0 for `delay` seconds, then sweeps forward over `duration` and
/// back over another `duration`, repeating. The grid fragment shader computes
/// the same value per pixel; this copy pins the timing down in tests.
pub fn scan_phase(time: f64, duration: f64, delay: f64) -> f64 {
    let dur = duration.max(0.05);
    let del = delay.max(0.0);
    let t = (time - del).max(0.0) % (2.0 * dur);
    if t < dur { t / dur } else { 1.0 - (t - dur) / dur }
}

/// Tuning for the scan-grid effect
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridScanParams {
    pub sensitivity: f64,
    pub line_thickness: f32,
    pub lines_color: String,
    pub scan_color: String,
    pub scan_opacity: f32,
    pub grid_scale: f32,
    pub enable_post: bool,
    pub bloom_intensity: f32,
    pub chromatic_aberration: f32,
    pub noise_intensity: f32,
    pub scan_glow: f32,
    pub scan_softness: f32,
    /// Seconds
    pub scan_duration: f32,
    /// Seconds
    pub scan_delay: f32,
}

impl Default for GridScanParams {
    fn default() -> Self {
        Self {
            sensitivity: 0.55,
            line_thickness: 1.0,
            lines_color: "#392e4e".to_string(),
            scan_color: "#FF9FFC".to_string(),
            scan_opacity: 0.4,
            grid_scale: 0.1,
            enable_post: true,
            bloom_intensity: 0.6,
            chromatic_aberration: 0.002,
            noise_intensity: 0.01,
            scan_glow: 0.5,
            scan_softness: 2.0,
            scan_duration: 2.0,
            scan_delay: 2.0,
        }
    }
}

/// Static uniform values for the scan-grid shader
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridScanUniforms {
    pub line_thickness: f32,
    pub lines_color: [f32; 3],
    pub scan_color: [f32; 3],
    pub grid_scale: f32,
    pub scan_opacity: f32,
    pub noise: f32,
    pub bloom: f32,
    pub chromatic: f32,
    pub scan_glow: f32,
    pub scan_softness: f32,
    pub scan_duration: f32,
    pub scan_delay: f32,
}

impl GridScanParams {
    /// Validate colors and clamp values the shader assumes are in range
    pub fn uniforms(&self) -> Result<GridScanUniforms, ColorError> {
        let lines = Rgb::from_hex(&self.lines_color)?.to_linear();
        let scan = Rgb::from_hex(&self.scan_color)?.to_linear();
        let (bloom, chromatic) = if self.enable_post {
            (self.bloom_intensity.max(0.0), self.chromatic_aberration)
        } else {
            (0.0, 0.0)
        };

        Ok(GridScanUniforms {
            line_thickness: self.line_thickness.max(0.0),
            lines_color: lines.to_array(),
            scan_color: scan.to_array(),
            grid_scale: self.grid_scale.max(1e-5),
            scan_opacity: self.scan_opacity.clamp(0.0, 1.0),
            noise: self.noise_intensity,
            bloom,
            chromatic,
            scan_glow: self.scan_glow,
            scan_softness: self.scan_softness,
            scan_duration: self.scan_duration.max(0.05),
            scan_delay: self.scan_delay.max(0.0),
        })
    }
}

/// Where the light rays originate, in normalized screen space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RaysOrigin {
    #[default]
    TopCenter,
    TopLeft,
    TopRight,
    BottomCenter,
}

impl RaysOrigin {
    /// Anchor point in `[0, 1]²`, y down, and the main ray direction
    pub fn anchor(&self) -> ([f32; 2], [f32; 2]) {
        match self {
            RaysOrigin::TopCenter => ([0.5, -0.2], [0.0, 1.0]),
            RaysOrigin::TopLeft => ([-0.2, -0.2], [0.707, 0.707]),
            RaysOrigin::TopRight => ([1.2, -0.2], [-0.707, 0.707]),
            RaysOrigin::BottomCenter => ([0.5, 1.2], [0.0, -1.0]),
        }
    }
}

/// Tuning for the hero light-rays backdrop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightRaysParams {
    pub origin: RaysOrigin,
    pub color: String,
    pub speed: f32,
    pub spread: f32,
    pub length: f32,
    pub follow_pointer: bool,
    pub pointer_influence: f32,
    pub noise: f32,
    pub distortion: f32,
}

impl Default for LightRaysParams {
    fn default() -> Self {
        Self {
            origin: RaysOrigin::TopCenter,
            color: "#00ffff".to_string(),
            speed: 1.5,
            spread: 0.8,
            length: 1.2,
            follow_pointer: true,
            pointer_influence: 0.1,
            noise: 0.1,
            distortion: 0.05,
        }
    }
}

/// Static uniform values for the light-rays shader
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightRaysUniforms {
    pub origin: [f32; 2],
    pub direction: [f32; 2],
    pub color: [f32; 3],
    pub speed: f32,
    pub spread: f32,
    pub length: f32,
    pub pointer_influence: f32,
    pub noise: f32,
    pub distortion: f32,
}

impl LightRaysParams {
    pub fn uniforms(&self) -> Result<LightRaysUniforms, ColorError> {
        let (origin, direction) = self.origin.anchor();
        Ok(LightRaysUniforms {
            origin,
            direction,
            color: Rgb::from_hex(&self.color)?.to_array(),
            speed: self.speed,
            spread: self.spread.max(0.0),
            length: self.length.max(0.0),
            pointer_influence: if self.follow_pointer {
                self.pointer_influence
            } else {
                0.0
            },
            noise: self.noise.clamp(0.0, 1.0),
            distortion: self.distortion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_parse_six_digit_hex() {
        let c = Rgb::from_hex("#FF9FFC").unwrap();
        assert!((c.r - 1.0).abs() < EPS);
        assert!((c.g - 159.0 / 255.0).abs() < EPS);
        assert!((c.b - 252.0 / 255.0).abs() < EPS);
    }

    #[test]
    fn test_parse_three_digit_hex() {
        let c = Rgb::from_hex("#0f0").unwrap();
        assert_eq!(c, Rgb::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_parse_hex_errors() {
        assert!(matches!(
            Rgb::from_hex("392e4e"),
            Err(ColorError::MissingHash(_))
        ));
        assert!(matches!(
            Rgb::from_hex("#39"),
            Err(ColorError::BadLength(_))
        ));
        assert!(matches!(
            Rgb::from_hex("#zz2e4e"),
            Err(ColorError::BadDigit(_))
        ));
    }

    #[test]
    fn test_color_error_display() {
        let err = Rgb::from_hex("red").unwrap_err();
        assert_eq!(err.to_string(), "color must start with '#': red");
    }

    #[test]
    fn test_to_linear_endpoints() {
        let black = Rgb::new(0.0, 0.0, 0.0).to_linear();
        let white = Rgb::new(1.0, 1.0, 1.0).to_linear();
        assert_eq!(black, Rgb::new(0.0, 0.0, 0.0));
        assert!((white.r - 1.0).abs() < EPS);

        let mid = Rgb::new(0.5, 0.5, 0.5).to_linear();
        assert!((mid.r - 0.2140).abs() < 1e-3);
    }

    #[test]
    fn test_resolution_from_viewport() {
        let res = Resolution::from_viewport(1280.0, 720.0, 1.5);
        assert_eq!(res.buffer_width, 1920);
        assert_eq!(res.buffer_height, 1080);
        assert_eq!(res.uniform(), [1920.0, 1080.0, 1.5]);
    }

    #[test]
    fn test_resolution_clamps_pixel_ratio() {
        let hi = Resolution::from_viewport(100.0, 100.0, 3.0);
        assert_eq!(hi.pixel_ratio, MAX_PIXEL_RATIO);
        assert_eq!(hi.buffer_width, 200);

        let lo = Resolution::from_viewport(100.0, 100.0, 0.5);
        assert_eq!(lo.pixel_ratio, 1.0);

        let nan = Resolution::from_viewport(100.0, 100.0, f64::NAN);
        assert_eq!(nan.pixel_ratio, 1.0);
    }

    #[test]
    fn test_resolution_degenerate_sizes() {
        let res = Resolution::from_viewport(0.0, -20.0, 1.0);
        assert_eq!(res.buffer_width, 1);
        assert_eq!(res.buffer_height, 1);

        let res = Resolution::from_viewport(f64::NAN, f64::INFINITY, 2.0);
        assert_eq!(res.buffer_width, 1);
        assert_eq!(res.buffer_height, 1);
    }

    #[test]
    fn test_scan_phase_ping_pong() {
        let (dur, delay) = (2.0, 2.0);
        assert_eq!(scan_phase(0.0, dur, delay), 0.0);
        assert_eq!(scan_phase(2.0, dur, delay), 0.0);
        assert!((scan_phase(3.0, dur, delay) - 0.5).abs() < 1e-9);
        assert!((scan_phase(3.999, dur, delay) - 0.9995).abs() < 1e-6);
        assert!((scan_phase(5.0, dur, delay) - 0.5).abs() < 1e-9);
        assert!(scan_phase(6.0, dur, delay).abs() < 1e-9);
    }

    #[test]
    fn test_scan_phase_stays_in_unit_range() {
        for step in 0..500 {
            let p = scan_phase(step as f64 * 0.031, 1.3, 0.4);
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_gridscan_defaults_produce_uniforms() {
        let uniforms = GridScanParams::default().uniforms().unwrap();
        assert_eq!(uniforms.bloom, 0.6);
        assert_eq!(uniforms.chromatic, 0.002);
        assert_eq!(uniforms.scan_opacity, 0.4);
        assert_eq!(uniforms.scan_duration, 2.0);
    }

    #[test]
    fn test_gridscan_post_disabled_zeroes_effects() {
        let params = GridScanParams {
            enable_post: false,
            ..Default::default()
        };
        let uniforms = params.uniforms().unwrap();
        assert_eq!(uniforms.bloom, 0.0);
        assert_eq!(uniforms.chromatic, 0.0);
    }

    #[test]
    fn test_gridscan_clamps_ranges() {
        let params = GridScanParams {
            scan_opacity: 4.0,
            grid_scale: 0.0,
            line_thickness: -1.0,
            scan_duration: 0.0,
            scan_delay: -3.0,
            ..Default::default()
        };
        let uniforms = params.uniforms().unwrap();
        assert_eq!(uniforms.scan_opacity, 1.0);
        assert_eq!(uniforms.grid_scale, 1e-5);
        assert_eq!(uniforms.line_thickness, 0.0);
        assert_eq!(uniforms.scan_duration, 0.05);
        assert_eq!(uniforms.scan_delay, 0.0);
    }

    #[test]
    fn test_gridscan_bad_color_is_error() {
        let params = GridScanParams {
            scan_color: "pink".to_string(),
            ..Default::default()
        };
        assert!(params.uniforms().is_err());
    }

    #[test]
    fn test_light_rays_defaults() {
        let uniforms = LightRaysParams::default().uniforms().unwrap();
        assert_eq!(uniforms.color, [0.0, 1.0, 1.0]);
        assert_eq!(uniforms.origin, [0.5, -0.2]);
        assert_eq!(uniforms.pointer_influence, 0.1);
    }

    #[test]
    fn test_light_rays_without_pointer_follow() {
        let params = LightRaysParams {
            follow_pointer: false,
            ..Default::default()
        };
        assert_eq!(params.uniforms().unwrap().pointer_influence, 0.0);
    }
}
