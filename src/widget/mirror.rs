//! External state mirroring.

use super::{SlideConfirm, TimerKind};
use crate::core::{EntityState, StateTransition};
use crate::effects::Effect;
use crate::source::StateSource;

impl SlideConfirm {
    /// Observe a (possibly unchanged) entity state pushed by the host.
    ///
    /// A changed state is always recorded. The handle follows it after the
    /// settle delay, unless a drag owns the handle, in which case the move
    /// is left to the end of the drag.
    pub fn on_external_update(&mut self, new_state: EntityState) -> Vec<Effect> {
        if !self.mounted {
            return Vec::new();
        }
        self.observe(new_state);
        self.drain()
    }

    /// Pull the configured entity's state from `source` and observe it.
    /// An absent entity is observed as `unknown`.
    pub fn sync_from<S: StateSource + ?Sized>(&mut self, source: &S) -> Vec<Effect> {
        let state = source
            .entity_state(&self.config.entity)
            .unwrap_or_else(EntityState::unknown);
        self.on_external_update(state)
    }

    fn observe(&mut self, new_state: EntityState) {
        if self.state.last_known_state.as_ref() == Some(&new_state) {
            tracing::trace!(entity = %self.config.entity, state = %new_state, "state unchanged");
            return;
        }

        let previous = self.state.last_known_state.replace(new_state.clone());
        let first_observation = previous.is_none();
        if let Some(from) = previous {
            self.entity_history = self.entity_history.record(StateTransition {
                from,
                to: new_state.clone(),
                at: self.now,
            });
        }

        if self.state.is_dragging {
            tracing::debug!(
                entity = %self.config.entity,
                state = %new_state,
                "state change deferred while dragging"
            );
            return;
        }

        let mut animate = !first_observation;
        if let Some((handle, pending_animate)) = self.pending_settle.take() {
            // The replaced placement never happened; keep it un-animated.
            if self.timers.cancel(handle) {
                animate &= pending_animate;
            }
        }

        let delay = self.timings.settle(first_observation);
        if let Some(handle) = self.schedule(delay, TimerKind::Settle { animate }) {
            self.pending_settle = Some((handle, animate));
        }
        tracing::debug!(
            entity = %self.config.entity,
            state = %new_state,
            first_observation,
            delay_ms = delay.as_millis() as u64,
            "handle placement scheduled"
        );
    }

    /// Move the handle to the offset implied by the current entity state.
    /// Skipped while a drag owns the handle.
    pub(super) fn reposition(&mut self, animate: bool) {
        if self.state.is_dragging {
            tracing::trace!(entity = %self.config.entity, "placement skipped during drag");
            return;
        }
        let offset = self.resting_offset();
        self.write_handle(offset, animate);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SlideConfirmConfig;
    use crate::core::{EntityState, TrackLayout};
    use crate::effects::Effect;
    use crate::source::EntityRecord;
    use crate::widget::SlideConfirm;
    use std::collections::HashMap;
    use std::time::Duration;

    fn widget() -> SlideConfirm {
        let config = SlideConfirmConfig {
            entity: "light.kitchen".into(),
            ..SlideConfirmConfig::default()
        };
        SlideConfirm::new(config, TrackLayout::with_widths(200.0, 50.0))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn first_observation_places_without_animation_after_long_settle() {
        let mut widget = widget();
        assert!(widget.on_external_update(EntityState::on()).is_empty());

        assert!(widget.advance(ms(49)).is_empty());
        let effects = widget.advance(ms(1));
        assert_eq!(
            effects,
            vec![Effect::MoveHandle {
                offset: 150.0,
                animate: false
            }]
        );
    }

    #[test]
    fn later_changes_animate_after_short_settle() {
        let mut widget = widget();
        widget.on_external_update(EntityState::off());
        widget.advance(ms(50));

        widget.on_external_update(EntityState::on());
        assert!(widget.advance(ms(9)).is_empty());
        assert_eq!(
            widget.advance(ms(1)),
            vec![Effect::MoveHandle {
                offset: 150.0,
                animate: true
            }]
        );
    }

    #[test]
    fn repeated_state_is_ignored() {
        let mut widget = widget();
        widget.on_external_update(EntityState::on());
        widget.advance(ms(50));

        assert!(widget.on_external_update(EntityState::on()).is_empty());
        assert_eq!(widget.pending_timers(), 0);
        assert!(widget.advance(ms(100)).is_empty());
    }

    #[test]
    fn unknown_rests_at_start() {
        let mut widget = widget();
        widget.on_external_update(EntityState::on());
        widget.advance(ms(50));
        widget.on_external_update(EntityState::unknown());
        widget.advance(ms(10));

        assert_eq!(widget.handle_offset(), 0.0);
        assert_eq!(widget.entity_state(), EntityState::unknown());
    }

    #[test]
    fn superseded_first_placement_stays_unanimated() {
        let mut widget = widget();
        widget.on_external_update(EntityState::off());
        widget.advance(ms(5));
        widget.on_external_update(EntityState::on());

        assert_eq!(widget.pending_timers(), 1);
        assert_eq!(
            widget.advance(ms(10)),
            vec![Effect::MoveHandle {
                offset: 150.0,
                animate: false
            }]
        );
    }

    #[test]
    fn history_records_changes_with_virtual_time() {
        let mut widget = widget();
        widget.on_external_update(EntityState::off());
        widget.advance(ms(70));
        widget.on_external_update(EntityState::on());

        let last = widget.entity_history().last().unwrap();
        assert_eq!(last.from, EntityState::off());
        assert_eq!(last.to, EntityState::on());
        assert_eq!(last.at, ms(70));
    }

    #[test]
    fn sync_from_treats_absent_entity_as_unknown() {
        let mut widget = widget();
        let mut states: HashMap<String, EntityRecord> = HashMap::new();
        widget.sync_from(&states);
        assert_eq!(widget.entity_state(), EntityState::unknown());

        states.insert("light.kitchen".into(), EntityRecord::new("on"));
        widget.sync_from(&states);
        widget.advance(ms(50));
        assert!(widget.is_affirmative());
        assert_eq!(widget.handle_offset(), 150.0);
    }
}
