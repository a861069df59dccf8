#[cfg(test)]
mod tests {
    use crate::core::{
        BookingDraft, BookingError, BookingField, GALLERY_IMAGES, GRIDSCAN_TRANSITION_MS,
        GridScanParams, MemorySession, OverlayPhase, OverlaySchedule, Resolution, ScrollRange,
        Stage, active_index, has_seen_intro, initial_stage, item_visual, mark_intro_shown,
        pinned_distance_vh, submit,
    };

    /// Walk one page load: returns the stages visited
    fn run_page_load(session: &mut MemorySession, force_show_intro: bool) -> Vec<Stage> {
        let mut stage = initial_stage(force_show_intro, has_seen_intro(session));
        let mut visited = vec![stage];
        while !stage.is_terminal() {
            if stage == Stage::GridScan {
                mark_intro_shown(session);
            }
            stage = stage.next();
            visited.push(stage);
        }
        visited
    }

    #[test]
    fn test_intro_plays_once_per_session() {
        let mut session = MemorySession::new();

        let first = run_page_load(&mut session, false);
        assert_eq!(first, vec![Stage::Intro, Stage::GridScan, Stage::Main]);

        let second = run_page_load(&mut session, false);
        assert_eq!(second, vec![Stage::Main]);
    }

    #[test]
    fn test_forced_intro_replays() {
        let mut session = MemorySession::new();
        run_page_load(&mut session, true);
        let again = run_page_load(&mut session, true);
        assert_eq!(again.first(), Some(&Stage::Intro));
    }

    #[test]
    fn test_new_session_replays_intro() {
        let mut session = MemorySession::new();
        run_page_load(&mut session, false);

        let mut fresh = MemorySession::new();
        assert_eq!(run_page_load(&mut fresh, false).len(), 3);
    }

    #[test]
    fn test_intro_timeline_totals() {
        let intro = OverlaySchedule::intro();
        let total = intro.complete_at() + GRIDSCAN_TRANSITION_MS;
        assert_eq!(total, 4600);
        assert_eq!(intro.phase_at(3400), OverlayPhase::Dismissing);
    }

    #[test]
    fn test_gallery_cursor_over_pinned_scroll() {
        let range = ScrollRange::Pinned { distance_vh: 100.0 };
        let viewport = 900.0;
        let n = GALLERY_IMAGES.len();

        let mut last = 0;
        for scrolled in (0..=900).step_by(15) {
            let p = range.progress(-(scrolled as f64), viewport, viewport);
            let idx = active_index(p, n);
            assert!(idx < n);
            assert!(idx >= last, "cursor must not move backwards while scrolling down");
            if p < 1.0 {
                assert_eq!(idx, (p * n as f64).floor() as usize);
            }
            last = idx;
        }
        assert_eq!(last, n - 1);
    }

    #[test]
    fn test_exactly_one_item_visible() {
        let n = 4;
        let range = ScrollRange::Pinned {
            distance_vh: pinned_distance_vh(n),
        };
        for scrolled in [0.0, 250.0, 800.0, 1_500.0, 10_000.0] {
            let active = active_index(range.progress(-scrolled, 800.0, 800.0), n);
            let visible = (0..n).filter(|&i| item_visual(i, active).is_visible()).count();
            assert_eq!(visible, 1);
        }
    }

    #[test]
    fn test_booking_rejects_each_missing_required_field() {
        let filled = BookingDraft {
            name: "Ana".to_string(),
            email: "ana@example.org".to_string(),
            phone: "555 123 4567".to_string(),
            date: "2026-12-31".to_string(),
            seats: 3,
            message: String::new(),
        };
        assert!(submit(&filled).is_ok());

        let cases: [(BookingField, fn(&mut BookingDraft)); 4] = [
            (BookingField::Name, |d| d.name.clear()),
            (BookingField::Email, |d| d.email.clear()),
            (BookingField::Phone, |d| d.phone.clear()),
            (BookingField::Date, |d| d.date.clear()),
        ];

        for (field, clear) in cases {
            let mut draft = filled.clone();
            clear(&mut draft);
            let errors = submit(&draft).unwrap_err();
            assert_eq!(errors, vec![BookingError::Required(field)]);
        }
    }

    #[test]
    fn test_resize_rederives_resolution() {
        let sizes = [
            (1920.0, 1080.0, 1.0),
            (375.0, 812.0, 3.0),
            (0.0, 0.0, 2.0),
            (800.0, 600.0, 1.25),
        ];
        for (w, h, dpr) in sizes {
            let res = Resolution::from_viewport(w, h, dpr);
            assert!(res.buffer_width >= 1 && res.buffer_height >= 1);
            assert!(res.pixel_ratio >= 1.0 && res.pixel_ratio <= 2.0);
        }

        let before = Resolution::from_viewport(1024.0, 768.0, 1.0);
        let after = Resolution::from_viewport(640.0, 480.0, 1.0);
        assert_ne!(before, after);
        assert_eq!(after.buffer_width, 640);
    }

    #[test]
    fn test_transition_effect_uses_default_palette() {
        let params = GridScanParams::default();
        assert_eq!(params.lines_color, "#392e4e");
        assert!(params.uniforms().is_ok());
    }
}
