//! Top-level display stages and the timed-phase overlay schedule
//!
//! The root component walks `Intro -> GridScan -> Main` exactly once per
//! page load. Each step is driven by fixed millisecond delays.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// How long the intro image stays fully visible
pub const INTRO_DISPLAY_MS: u32 = 3000;

/// Duration of the intro dismiss animation
pub const INTRO_FADE_MS: u32 = 800;

/// How long the scan-effect transition is shown before the main content
pub const GRIDSCAN_TRANSITION_MS: u32 = 800;

/// Named phase of the top-level display
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[display("intro")]
    Intro,
    #[display("gridscan")]
    GridScan,
    #[display("main")]
    Main,
}

impl Stage {
    /// The stage that follows this one. `Main` is terminal.
    pub fn next(self) -> Self {
        match self {
            Stage::Intro => Stage::GridScan,
            Stage::GridScan | Stage::Main => Stage::Main,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Stage::Main
    }

    /// Whether a full-screen overlay covers the page in this stage
    pub fn is_overlay(self) -> bool {
        !self.is_terminal()
    }
}

/// Pick the stage to start from.
///
/// The intro plays when it is forced at build time or when this session has
/// not seen it yet.
pub fn initial_stage(force_show_intro: bool, has_seen_intro: bool) -> Stage {
    if force_show_intro || !has_seen_intro {
        Stage::Intro
    } else {
        Stage::Main
    }
}

/// Phase of a timed overlay
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Content is on screen
    Showing,
    /// Exit animation is running
    Dismissing,
    /// Exit animation finished; the parent has been notified
    Complete,
}

/// Fixed timing for an overlay that shows, dismisses, then completes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlaySchedule {
    pub display_ms: u32,
    pub fade_ms: u32,
}

impl Default for OverlaySchedule {
    fn default() -> Self {
        Self::intro()
    }
}

impl OverlaySchedule {
    pub const fn new(display_ms: u32, fade_ms: u32) -> Self {
        Self {
            display_ms,
            fade_ms,
        }
    }

    /// Schedule used by the intro overlay
    pub const fn intro() -> Self {
        Self::new(INTRO_DISPLAY_MS, INTRO_FADE_MS)
    }

    /// Delay before the dismiss animation starts
    pub fn dismiss_at(&self) -> u32 {
        self.display_ms
    }

    /// Delay before the completion callback fires
    pub fn complete_at(&self) -> u32 {
        self.display_ms.saturating_add(self.fade_ms)
    }

    pub fn phase_at(&self, elapsed_ms: u32) -> OverlayPhase {
        if elapsed_ms < self.dismiss_at() {
            OverlayPhase::Showing
        } else if elapsed_ms < self.complete_at() {
            OverlayPhase::Dismissing
        } else {
            OverlayPhase::Complete
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_progression() {
        assert_eq!(Stage::Intro.next(), Stage::GridScan);
        assert_eq!(Stage::GridScan.next(), Stage::Main);
        assert_eq!(Stage::Main.next(), Stage::Main);
    }

    #[test]
    fn test_stage_overlay_flags() {
        assert!(Stage::Intro.is_overlay());
        assert!(Stage::GridScan.is_overlay());
        assert!(!Stage::Main.is_overlay());
        assert!(Stage::Main.is_terminal());
    }

    #[test]
    fn test_stage_display_names() {
        assert_eq!(Stage::Intro.to_string(), "intro");
        assert_eq!(Stage::GridScan.to_string(), "gridscan");
        assert_eq!(Stage::Main.to_string(), "main");
    }

    #[test]
    fn test_initial_stage() {
        assert_eq!(initial_stage(false, false), Stage::Intro);
        assert_eq!(initial_stage(false, true), Stage::Main);
        assert_eq!(initial_stage(true, true), Stage::Intro);
        assert_eq!(initial_stage(true, false), Stage::Intro);
    }

    #[test]
    fn test_intro_schedule_timings() {
        let schedule = OverlaySchedule::intro();
        assert_eq!(schedule.dismiss_at(), 3000);
        assert_eq!(schedule.complete_at(), 3800);
    }

    #[test]
    fn test_overlay_phases() {
        let schedule = OverlaySchedule::new(100, 50);

        assert_eq!(schedule.phase_at(0), OverlayPhase::Showing);
        assert_eq!(schedule.phase_at(99), OverlayPhase::Showing);
        assert_eq!(schedule.phase_at(100), OverlayPhase::Dismissing);
        assert_eq!(schedule.phase_at(149), OverlayPhase::Dismissing);
        assert_eq!(schedule.phase_at(150), OverlayPhase::Complete);
        assert_eq!(schedule.phase_at(u32::MAX), OverlayPhase::Complete);
    }

    #[test]
    fn test_zero_fade_completes_on_dismiss() {
        let schedule = OverlaySchedule::new(10, 0);
        assert_eq!(schedule.phase_at(10), OverlayPhase::Complete);
    }

    #[test]
    fn test_complete_at_saturates() {
        let schedule = OverlaySchedule::new(u32::MAX, 10);
        assert_eq!(schedule.complete_at(), u32::MAX);
    }
}
