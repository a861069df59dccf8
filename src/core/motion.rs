//! Frame-to-frame motion math: pointer smoothing and the hero microphone pose

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Largest frame step fed into the smoothing (seconds)
pub const MAX_FRAME_DELTA: f64 = 0.1;

/// Camera follow factor per frame for the hero rig
pub const CAMERA_LERP: f64 = 0.05;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn with_length(&self, len: f64) -> Self {
        let current = self.length();
        if current == 0.0 {
            *self
        } else {
            *self * (len / current)
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Critically damped spring toward `target`.
///
/// Updates `velocity` in place and returns the new position. `max_speed`
/// caps the distance covered per `smooth_time`; pass `f64::INFINITY` for no
/// cap.
pub fn smooth_damp(
    current: Vec2,
    target: Vec2,
    velocity: &mut Vec2,
    smooth_time: f64,
    max_speed: f64,
    dt: f64,
) -> Vec2 {
    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let mut change = current - target;
    let max_change = max_speed * smooth_time;
    if change.length() > max_change {
        change = change.with_length(max_change);
    }

    let clamped_target = current - change;
    let temp = (*velocity + change * omega) * dt;
    *velocity = (*velocity - temp * omega) * exp;

    clamped_target + (change + temp) * exp
}

/// Pointer-follow tuning derived from a single sensitivity knob
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LookConfig {
    pub skew_scale: f64,
    pub smooth_time: f64,
    pub max_speed: f64,
}

impl LookConfig {
    pub fn from_sensitivity(sensitivity: f64) -> Self {
        let s = if sensitivity.is_nan() {
            0.0
        } else {
            sensitivity.clamp(0.0, 1.0)
        };
        Self {
            skew_scale: lerp(0.06, 0.2, s),
            smooth_time: lerp(0.45, 0.12, s),
            max_speed: f64::INFINITY,
        }
    }
}

/// Smoothed pointer state feeding the shader skew uniform
#[derive(Clone, Copy, Debug, Default)]
pub struct LookState {
    pub target: Vec2,
    pub current: Vec2,
    pub velocity: Vec2,
}

impl LookState {
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Advance one frame and return the skew for this frame
    pub fn step(&mut self, config: &LookConfig, dt: f64) -> Vec2 {
        self.current = smooth_damp(
            self.current,
            self.target,
            &mut self.velocity,
            config.smooth_time,
            config.max_speed,
            dt,
        );
        Vec2::new(
            self.current.x * config.skew_scale,
            -self.current.y * config.skew_scale,
        )
    }
}

/// Pointer position relative to an element, as `[-1, 1]` with y up.
/// A zero-sized element maps everything to the center.
pub fn pointer_to_ndc(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let nx = ((client_x - left) / width) * 2.0 - 1.0;
    let ny = -(((client_y - top) / height) * 2.0 - 1.0);
    Vec2::new(nx, ny)
}

/// Seconds between two `performance.now()` readings, clamped to
/// `[0, MAX_FRAME_DELTA]` so a backgrounded tab does not jump the spring.
pub fn frame_delta(now_ms: f64, last_ms: f64) -> f64 {
    ((now_ms - last_ms) / 1000.0).clamp(0.0, MAX_FRAME_DELTA)
}

/// Hero microphone transform at `t` seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MicPose {
    /// Radians
    pub rot_x: f64,
    /// Radians
    pub rot_y: f64,
    /// Scene units
    pub offset_y: f64,
}

impl MicPose {
    pub fn at(t: f64) -> Self {
        Self {
            rot_x: (t / 4.0).cos() / 8.0 + 0.1,
            rot_y: (t / 4.0).sin() / 8.0,
            offset_y: (t / 1.5).sin() / 10.0,
        }
    }

    /// CSS transform for the microphone group; `unit_px` is the size of one
    /// scene unit on screen
    pub fn to_css(&self, unit_px: f64) -> String {
        format!(
            "translateY({:.2}px) rotateX({:.4}rad) rotateY({:.4}rad)",
            -self.offset_y * unit_px,
            self.rot_x,
            self.rot_y
        )
    }
}

/// Scene camera that eases toward a pointer-dependent position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 6.0,
        }
    }
}

impl CameraRig {
    pub fn goal(pointer: Vec2) -> (f64, f64, f64) {
        (-pointer.x * 2.0, -pointer.y * 2.0 + 1.0, 6.0)
    }

    pub fn step(&mut self, pointer: Vec2) {
        let (gx, gy, gz) = Self::goal(pointer);
        self.x = lerp(self.x, gx, CAMERA_LERP);
        self.y = lerp(self.y, gy, CAMERA_LERP);
        self.z = lerp(self.z, gz, CAMERA_LERP);
    }

    /// Orbit angles that keep the camera looking at the origin
    pub fn look_angles(&self) -> (f64, f64) {
        let yaw = self.x.atan2(self.z);
        let flat = (self.x * self.x + self.z * self.z).sqrt();
        let pitch = self.y.atan2(flat);
        (yaw, pitch)
    }

    /// CSS transform placing the scene as seen from this camera
    pub fn to_css(&self) -> String {
        let (yaw, pitch) = self.look_angles();
        format!("rotateX({:.4}rad) rotateY({:.4}rad)", pitch, -yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_vec2_ops() {
        let a = Vec2::new(3.0, 4.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(a + Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0));
        assert_eq!(a - Vec2::new(1.0, 1.0), Vec2::new(2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
        assert!((a.with_length(10.0).length() - 10.0).abs() < EPS);
        assert_eq!(Vec2::ZERO.with_length(5.0), Vec2::ZERO);
    }

    #[test]
    fn test_smooth_damp_converges() {
        let target = Vec2::new(1.0, -1.0);
        let mut current = Vec2::ZERO;
        let mut velocity = Vec2::ZERO;
        for _ in 0..600 {
            current = smooth_damp(current, target, &mut velocity, 0.2, f64::INFINITY, 1.0 / 60.0);
        }
        assert!((current - target).length() < 1e-3);
    }

    #[test]
    fn test_smooth_damp_zero_dt_is_stationary() {
        let mut velocity = Vec2::ZERO;
        let out = smooth_damp(
            Vec2::new(0.5, 0.5),
            Vec2::ZERO,
            &mut velocity,
            0.3,
            f64::INFINITY,
            0.0,
        );
        assert!((out - Vec2::new(0.5, 0.5)).length() < EPS);
    }

    #[test]
    fn test_smooth_damp_respects_max_speed() {
        let mut velocity = Vec2::ZERO;
        let out = smooth_damp(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            &mut velocity,
            0.5,
            1.0,
            0.1,
        );
        // Never moves further than max_speed * smooth_time toward the target
        assert!(out.x <= 0.5 + EPS);
        assert!(out.x > 0.0);
    }

    #[test]
    fn test_look_config_bounds() {
        let low = LookConfig::from_sensitivity(0.0);
        assert!((low.skew_scale - 0.06).abs() < EPS);
        assert!((low.smooth_time - 0.45).abs() < EPS);

        let high = LookConfig::from_sensitivity(5.0);
        assert!((high.skew_scale - 0.2).abs() < EPS);
        assert!((high.smooth_time - 0.12).abs() < EPS);

        let nan = LookConfig::from_sensitivity(f64::NAN);
        assert_eq!(nan, low);
    }

    #[test]
    fn test_look_state_flips_y() {
        let config = LookConfig {
            skew_scale: 1.0,
            smooth_time: 0.0001,
            max_speed: f64::INFINITY,
        };
        let mut state = LookState::default();
        state.set_target(Vec2::new(0.5, 0.5));
        let skew = state.step(&config, MAX_FRAME_DELTA);
        assert!(skew.x > 0.0);
        assert!(skew.y < 0.0);
    }

    #[test]
    fn test_pointer_to_ndc() {
        let center = pointer_to_ndc(150.0, 100.0, 100.0, 50.0, 100.0, 100.0);
        assert!(center.length() < EPS);

        let top_left = pointer_to_ndc(100.0, 50.0, 100.0, 50.0, 100.0, 100.0);
        assert_eq!(top_left, Vec2::new(-1.0, 1.0));

        let bottom_right = pointer_to_ndc(200.0, 150.0, 100.0, 50.0, 100.0, 100.0);
        assert_eq!(bottom_right, Vec2::new(1.0, -1.0));

        assert_eq!(pointer_to_ndc(10.0, 10.0, 0.0, 0.0, 0.0, 0.0), Vec2::ZERO);
    }

    #[test]
    fn test_frame_delta_clamped() {
        assert!((frame_delta(1016.0, 1000.0) - 0.016).abs() < EPS);
        assert_eq!(frame_delta(5000.0, 1000.0), MAX_FRAME_DELTA);
        assert_eq!(frame_delta(900.0, 1000.0), 0.0);
    }

    #[test]
    fn test_mic_pose_at_zero() {
        let pose = MicPose::at(0.0);
        assert!((pose.rot_x - (1.0 / 8.0 + 0.1)).abs() < EPS);
        assert!(pose.rot_y.abs() < EPS);
        assert!(pose.offset_y.abs() < EPS);
    }

    #[test]
    fn test_mic_pose_is_bounded() {
        for step in 0..200 {
            let pose = MicPose::at(step as f64 * 0.37);
            assert!(pose.rot_y.abs() <= 0.125 + EPS);
            assert!(pose.offset_y.abs() <= 0.1 + EPS);
        }
    }

    #[test]
    fn test_camera_rig_eases_toward_goal() {
        let mut rig = CameraRig::default();
        let pointer = Vec2::new(1.0, 0.0);
        rig.step(pointer);
        assert!((rig.x - (-2.0 * CAMERA_LERP)).abs() < EPS);
        assert!((rig.y - CAMERA_LERP).abs() < EPS);

        for _ in 0..500 {
            rig.step(pointer);
        }
        assert!((rig.x + 2.0).abs() < 1e-6);
        assert!((rig.y - 1.0).abs() < 1e-6);
        assert!((rig.z - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_camera_look_angles_at_rest() {
        let rig = CameraRig::default();
        let (yaw, pitch) = rig.look_angles();
        assert!(yaw.abs() < EPS);
        assert!(pitch.abs() < EPS);
    }
}
