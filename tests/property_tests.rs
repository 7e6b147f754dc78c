//! Property-based tests for the widget.
//!
//! These tests use proptest to check that the handle-ownership rules hold
//! across many randomly generated inputs.

use proptest::prelude::*;
use slide_confirm::config::{Action, SlideConfirmConfig};
use slide_confirm::core::{EntityState, TrackLayout};
use slide_confirm::effects::{Effect, PointerId};
use slide_confirm::SlideConfirm;
use std::time::Duration;

const POINTER: PointerId = PointerId(3);

fn widget(layout: TrackLayout) -> SlideConfirm {
    let config = SlideConfirmConfig {
        entity: "switch.fountain".into(),
        action_when_on: Some(Action {
            action: "call-service".into(),
            service: "switch.turn_off".into(),
            ..Action::default()
        }),
        action_when_off: Some(Action {
            action: "call-service".into(),
            service: "switch.turn_on".into(),
            ..Action::default()
        }),
        ..SlideConfirmConfig::default()
    };
    SlideConfirm::new(config, layout)
}

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> EntityState {
        match variant {
            0 => EntityState::on(),
            1 => EntityState::off(),
            2 => EntityState::unknown(),
            _ => EntityState::from("unavailable"),
        }
    }
}

prop_compose! {
    fn arbitrary_layout()(
        track_left in -100.0..400.0f64,
        track_width in 0.0..600.0f64,
        handle_width in 1.0..120.0f64,
    ) -> TrackLayout {
        TrackLayout::new(track_left, track_width, handle_width)
    }
}

proptest! {
    #[test]
    fn settled_handle_matches_entity_state(state in arbitrary_state(), layout in arbitrary_layout()) {
        let mut widget = widget(layout);
        widget.on_external_update(state.clone());
        widget.advance(Duration::from_millis(50));

        let expected = if state.is_on() { layout.end_offset() } else { 0.0 };
        prop_assert_eq!(widget.handle_offset(), expected);
    }

    #[test]
    fn repeated_update_is_idempotent(state in arbitrary_state(), repeats in 1..5usize) {
        let mut widget = widget(TrackLayout::with_widths(200.0, 50.0));
        widget.on_external_update(state.clone());
        widget.advance(Duration::from_millis(50));

        for _ in 0..repeats {
            prop_assert!(widget.on_external_update(state.clone()).is_empty());
            prop_assert!(widget.advance(Duration::from_millis(50)).is_empty());
        }
    }

    #[test]
    fn handle_offset_stays_on_track(
        layout in arbitrary_layout(),
        pointers in prop::collection::vec(-1000.0..1000.0f64, 1..20),
    ) {
        let mut widget = widget(layout);
        widget.on_gesture_start(POINTER, 0.0).unwrap();

        for x in pointers {
            widget.on_gesture_move(x).unwrap();
            let offset = widget.handle_offset();
            prop_assert!(offset >= 0.0);
            prop_assert!(offset <= layout.end_offset());
        }
    }

    #[test]
    fn drag_position_follows_pointer_only(
        updates in prop::collection::vec(arbitrary_state(), 1..6),
        pointers in prop::collection::vec(0.0..250.0f64, 1..10),
    ) {
        let layout = TrackLayout::with_widths(200.0, 50.0);
        let mut widget = widget(layout);
        widget.on_external_update(EntityState::off());
        widget.advance(Duration::from_millis(50));
        widget.on_gesture_start(POINTER, 25.0).unwrap();

        let mut expected = widget.handle_offset();
        for (i, x) in pointers.iter().enumerate() {
            widget.on_gesture_move(*x).unwrap();
            expected = layout.offset_for_pointer(*x);

            let state = updates[i % updates.len()].clone();
            let effects = widget.on_external_update(state);
            prop_assert!(effects.iter().all(|e| e.handle_move().is_none()));
            prop_assert!(widget.advance(Duration::from_millis(60)).is_empty());
            prop_assert_eq!(widget.handle_offset(), expected);
            prop_assert!(!(widget.is_dragging() && widget.is_confirmed()));
        }
        prop_assert_eq!(widget.handle_offset(), expected);
    }

    #[test]
    fn single_gesture_dispatches_at_most_once(
        state in arbitrary_state(),
        moves in prop::collection::vec(0.0..250.0f64, 0..30),
        release_x in 0.0..250.0f64,
    ) {
        let mut widget = widget(TrackLayout::with_widths(200.0, 50.0));
        widget.on_external_update(state);
        widget.advance(Duration::from_millis(50));

        let mut dispatches = 0;
        dispatches += widget
            .on_gesture_start(POINTER, 25.0)
            .unwrap()
            .iter()
            .filter(|e| e.is_dispatch())
            .count();
        for x in moves {
            dispatches += widget
                .on_gesture_move(x)
                .unwrap()
                .iter()
                .filter(|e| e.is_dispatch())
                .count();
        }
        let release = widget.on_gesture_end(POINTER, release_x, 50.0).unwrap();
        dispatches += release.effects.iter().filter(|e| e.is_dispatch()).count();
        dispatches += widget
            .advance(Duration::from_secs(3))
            .iter()
            .filter(|e| e.is_dispatch())
            .count();

        prop_assert!(dispatches <= 1);
        prop_assert_eq!(dispatches == 1, widget.phase_history().transitions().len() == 2);
    }

    #[test]
    fn sequence_always_returns_to_resting_offset(state in arbitrary_state(), later in arbitrary_state()) {
        let mut widget = widget(TrackLayout::with_widths(200.0, 50.0));
        widget.on_external_update(state.clone());
        widget.advance(Duration::from_millis(50));

        let target = if state.is_on() { 25.0 } else { 175.0 };
        widget.on_gesture_start(POINTER, target).unwrap();
        widget.on_gesture_end(POINTER, target, 50.0).unwrap();
        widget.on_external_update(later.clone());
        let effects = widget.advance(Duration::from_millis(1600));

        let expected = if later.is_on() { 150.0 } else { 0.0 };
        prop_assert!(!widget.is_confirmed());
        prop_assert_eq!(widget.handle_offset(), expected);
        let unlocked = effects.contains(&Effect::SetConfirmed { active: false });
        prop_assert!(unlocked);
    }
}
