use daycycle::{palette_for, FixedClock, ModeController, ThemeSlider, TimeOfDay};
use proptest::prelude::*;

const MIDPOINTS: [f64; 4] = [12.5, 37.5, 62.5, 87.5];

// =============================================================================
// Hour partition
// =============================================================================

proptest! {
    #[test]
    fn every_valid_hour_maps_to_a_segment(hour in 0u32..24) {
        prop_assert!(TimeOfDay::from_hour(hour).is_ok());
    }

    #[test]
    fn every_invalid_hour_is_rejected(hour in 24u32..1000) {
        prop_assert!(TimeOfDay::from_hour(hour).is_err());
    }

    #[test]
    fn hour_partition_matches_documented_ranges(hour in 0u32..24) {
        let expected = if (6..12).contains(&hour) {
            TimeOfDay::Morning
        } else if (12..18).contains(&hour) {
            TimeOfDay::Afternoon
        } else if (18..22).contains(&hour) {
            TimeOfDay::Evening
        } else {
            TimeOfDay::Night
        };
        prop_assert_eq!(TimeOfDay::from_hour(hour).unwrap(), expected);
    }

    #[test]
    fn greeting_agrees_with_hour_partition(hour in 0u32..24) {
        let segment = TimeOfDay::from_hour(hour).unwrap();
        prop_assert_eq!(TimeOfDay::greeting_for_hour(hour).unwrap(), segment.greeting());
    }
}

// =============================================================================
// Slider partition and the lossy midpoint round trip
// =============================================================================

proptest! {
    #[test]
    fn every_valid_position_maps_to_a_segment(v in 0.0f64..=100.0) {
        prop_assert!(TimeOfDay::from_slider(v).is_ok());
    }

    #[test]
    fn positions_above_range_are_rejected(v in 100.0f64..1e6) {
        prop_assume!(v > 100.0);
        prop_assert!(TimeOfDay::from_slider(v).is_err());
    }

    #[test]
    fn positions_below_range_are_rejected(v in -1e6f64..0.0) {
        prop_assume!(v < 0.0);
        prop_assert!(TimeOfDay::from_slider(v).is_err());
    }

    #[test]
    fn slider_partition_matches_documented_ranges(v in 0.0f64..=100.0) {
        let expected = if v <= 25.0 {
            TimeOfDay::Morning
        } else if v <= 50.0 {
            TimeOfDay::Afternoon
        } else if v <= 75.0 {
            TimeOfDay::Evening
        } else {
            TimeOfDay::Night
        };
        prop_assert_eq!(TimeOfDay::from_slider(v).unwrap(), expected);
    }

    #[test]
    fn round_trip_snaps_to_a_midpoint(v in 0.0f64..=100.0) {
        let snapped = TimeOfDay::from_slider(v).unwrap().slider_midpoint();
        prop_assert!(MIDPOINTS.contains(&snapped));
    }

    #[test]
    fn round_trip_is_identity_only_at_midpoints(v in 0.0f64..=100.0) {
        let snapped = TimeOfDay::from_slider(v).unwrap().slider_midpoint();
        if MIDPOINTS.contains(&v) {
            prop_assert_eq!(snapped, v);
        } else {
            prop_assert_ne!(snapped, v);
        }
    }

    #[test]
    fn midpoint_stays_inside_its_own_quarter(v in 0.0f64..=100.0) {
        // Snapping twice changes nothing: the midpoint maps back to the
        // segment it belongs to.
        let segment = TimeOfDay::from_slider(v).unwrap();
        prop_assert_eq!(TimeOfDay::from_slider(segment.slider_midpoint()).unwrap(), segment);
    }
}

// =============================================================================
// Palette totality
// =============================================================================

proptest! {
    #[test]
    fn every_segment_palette_is_fully_populated(hour in 0u32..24) {
        let p = palette_for(TimeOfDay::from_hour(hour).unwrap());
        for token in [
            p.primary.start,
            p.primary.end,
            p.secondary.start,
            p.secondary.end,
            p.accent.start,
            p.accent.end,
            p.background.start,
            p.background.mid,
            p.background.end,
            p.card_background,
            p.text_primary,
            p.text_secondary,
        ] {
            prop_assert!(!token.is_empty());
            prop_assert!(token.starts_with('#'));
        }
    }
}

// =============================================================================
// Slider widget
// =============================================================================

proptest! {
    #[test]
    fn drag_never_commits(start in 0usize..4, v in 0.0f64..=100.0) {
        let committed = TimeOfDay::ALL[start];
        let mut slider = ThemeSlider::new(committed);
        slider.drag(v).unwrap();
        prop_assert_eq!(slider.committed(), committed);
        prop_assert_eq!(slider.preview(), TimeOfDay::from_slider(v).unwrap());
        prop_assert_eq!(
            slider.has_pending_change(),
            slider.preview() != committed
        );
    }

    #[test]
    fn apply_then_sync_always_converges(start in 0usize..4, v in 0.0f64..=100.0) {
        let mut slider = ThemeSlider::new(TimeOfDay::ALL[start]);
        slider.drag(v).unwrap();
        if let Some(cmd) = slider.apply() {
            let msg = cmd.execute().unwrap();
            let applied = msg.downcast_ref::<daycycle::ThemeAppliedMsg>().unwrap();
            slider.sync_committed(applied.time_of_day);
            // The echo from the owner snaps the thumb to a midpoint.
            prop_assert!(MIDPOINTS.contains(&slider.position()));
        }
        // Applied or not, the widget ends settled.
        prop_assert!(!slider.has_pending_change());
        prop_assert_eq!(slider.preview(), slider.committed());
    }

    #[test]
    fn nudge_keeps_position_in_range(
        start in 0usize..4,
        deltas in prop::collection::vec(-120.0f64..120.0, 0..12),
    ) {
        let mut slider = ThemeSlider::new(TimeOfDay::ALL[start]);
        for d in deltas {
            slider.nudge(d);
            prop_assert!((0.0..=100.0).contains(&slider.position()));
            prop_assert_eq!(
                slider.preview(),
                TimeOfDay::from_slider(slider.position()).unwrap()
            );
        }
    }
}

// =============================================================================
// Mode controller
// =============================================================================

proptest! {
    #[test]
    fn toggle_twice_lands_back_in_auto_on_the_clock(hour in 0u32..24) {
        let clock = FixedClock(hour);
        let mut ctl = ModeController::new(&clock).unwrap();
        let expected = TimeOfDay::from_hour(hour).unwrap();

        ctl.toggle(&clock).unwrap();
        prop_assert_eq!(ctl.active(), expected);

        ctl.toggle(&clock).unwrap();
        prop_assert_eq!(ctl.active(), expected);
        prop_assert_eq!(ctl.mode(), daycycle::ThemeMode::Auto);
    }

    #[test]
    fn entering_manual_always_seeds_from_the_clock(
        hour in 0u32..24,
        held in 0usize..4,
    ) {
        // Whatever was selected in a previous manual stretch is gone
        // after a round trip through auto.
        let clock = FixedClock(hour);
        let mut ctl = ModeController::new(&clock).unwrap();
        ctl.toggle(&clock).unwrap();
        ctl.set_manual(TimeOfDay::ALL[held]);
        ctl.toggle(&clock).unwrap();
        ctl.toggle(&clock).unwrap();
        prop_assert_eq!(ctl.active(), TimeOfDay::from_hour(hour).unwrap());
    }
}
