//! The slide-to-confirm interaction core.
//!
//! [`SlideConfirm`] reconciles three authorities over the handle position:
//! external entity state ([`mirror`]), pointer input ([`gesture`]) and the
//! post-confirmation lock ([`sequencer`]). Every entry point takes
//! `&mut self` and runs to completion before returning the effects the host
//! must apply, so transitions are atomic with respect to each other.
//!
//! Time is virtual. Delayed work sits in a [`TimerQueue`] and only runs from
//! [`SlideConfirm::advance`] / [`SlideConfirm::advance_to`].

mod gesture;
mod mirror;
mod sequencer;

pub use gesture::{GestureRejection, GestureSession, Release, ReleaseOutcome};
pub use sequencer::ConfirmPhase;

use crate::builder::SlideConfirmBuilder;
use crate::config::{SlideConfirmConfig, Timings};
use crate::core::{EntityState, Guard, StateHistory, TimerHandle, TimerQueue, TrackLayout};
use crate::effects::Effect;
use crate::view::Presentation;
use std::time::Duration;

/// Internal state owned exclusively by the widget.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetState {
    /// `None` until the first external observation.
    pub last_known_state: Option<EntityState>,
    pub is_dragging: bool,
    pub is_confirmed: bool,
    pub handle_offset: f64,
}

/// Named delayed callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TimerKind {
    /// Place the handle after an external update has settled.
    Settle { animate: bool },
    /// End of the confirmed lock.
    Dwell,
    /// Re-align the handle with the entity after a confirmation.
    Resync,
}

/// One mounted slide-to-confirm widget.
pub struct SlideConfirm {
    config: SlideConfirmConfig,
    timings: Timings,
    affirmative: Guard<EntityState>,
    layout: TrackLayout,
    state: WidgetState,
    phase: ConfirmPhase,
    session: Option<GestureSession>,
    timers: TimerQueue<TimerKind>,
    pending_settle: Option<(TimerHandle, bool)>,
    now: Duration,
    mounted: bool,
    outbox: Vec<Effect>,
    phase_history: StateHistory<ConfirmPhase>,
    entity_history: StateHistory<EntityState>,
}

impl SlideConfirm {
    /// Create a mounted widget. `config` is used as given; use
    /// [`SlideConfirm::builder`] to validate it first.
    pub fn new(config: SlideConfirmConfig, layout: TrackLayout) -> Self {
        let timings = config.timings;
        Self {
            config,
            timings,
            affirmative: Guard::entity_on(),
            layout,
            state: WidgetState::default(),
            phase: ConfirmPhase::Idle,
            session: None,
            timers: TimerQueue::new(),
            pending_settle: None,
            now: Duration::ZERO,
            mounted: true,
            outbox: Vec::new(),
            phase_history: StateHistory::new(),
            entity_history: StateHistory::new(),
        }
    }

    /// Start a validating builder.
    pub fn builder() -> SlideConfirmBuilder {
        SlideConfirmBuilder::new()
    }

    pub(crate) fn with_parts(
        config: SlideConfirmConfig,
        layout: TrackLayout,
        timings: Timings,
        affirmative: Guard<EntityState>,
    ) -> Self {
        let mut widget = Self::new(config, layout);
        widget.timings = timings;
        widget.affirmative = affirmative;
        widget
    }

    /// Get the card configuration (pure)
    pub fn config(&self) -> &SlideConfirmConfig {
        &self.config
    }

    /// Get the timer delays in effect (pure)
    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// Get the last measured layout (pure)
    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// Record fresh layout measurements. Takes effect for the next
    /// placement or pointer event; nothing moves immediately.
    pub fn set_layout(&mut self, layout: TrackLayout) {
        self.layout = layout;
    }

    /// Get current widget state (pure)
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Get the handle offset last written (pure)
    pub fn handle_offset(&self) -> f64 {
        self.state.handle_offset
    }

    /// Check if a drag is open (pure)
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    /// Check if the confirmed visual is showing (pure)
    pub fn is_confirmed(&self) -> bool {
        self.state.is_confirmed
    }

    /// Get current confirmation phase (pure)
    pub fn phase(&self) -> ConfirmPhase {
        self.phase
    }

    /// Get the open drag, if any (pure)
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Check if the widget is still mounted (pure)
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Last observed entity state, `unknown` before the first observation.
    pub fn entity_state(&self) -> EntityState {
        self.state.last_known_state.clone().unwrap_or_default()
    }

    /// Whether the current entity state rests the handle at the track end.
    pub fn is_affirmative(&self) -> bool {
        self.state
            .last_known_state
            .as_ref()
            .is_some_and(|state| self.affirmative.check(state))
    }

    /// Current presentation for the host's renderer.
    pub fn presentation(&self) -> Presentation {
        Presentation::build(
            &self.config,
            self.entity_state(),
            self.is_affirmative(),
            self.state.is_confirmed,
        )
    }

    /// Get confirmation phase history (pure)
    pub fn phase_history(&self) -> &StateHistory<ConfirmPhase> {
        &self.phase_history
    }

    /// Get observed entity state history (pure)
    pub fn entity_history(&self) -> &StateHistory<EntityState> {
        &self.entity_history
    }

    /// Virtual time since mount.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Deadline of the next pending timer, for hosts driving real timers.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Count timers still waiting to fire (pure)
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Advance virtual time by `elapsed`, firing every timer that falls due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Effect> {
        let target = self.now.saturating_add(elapsed);
        self.advance_to(target)
    }

    /// Advance virtual time to `target`. Time never moves backwards.
    ///
    /// Due timers fire one at a time in deadline order; each callback
    /// finishes, including anything it schedules, before the next one runs.
    pub fn advance_to(&mut self, target: Duration) -> Vec<Effect> {
        while let Some((deadline, kind)) = self.timers.pop_due(target) {
            self.now = self.now.max(deadline);
            self.fire(kind);
        }
        self.now = self.now.max(target);
        self.drain()
    }

    /// Tear the widget down: cancel every timer, release a captured
    /// pointer and abandon any drag without dispatching.
    pub fn unmount(&mut self) -> Vec<Effect> {
        if !self.mounted {
            return Vec::new();
        }
        self.timers.clear();
        self.pending_settle = None;
        if let Some(session) = self.session.take() {
            tracing::debug!(
                entity = %self.config.entity,
                pointer = session.pointer_id.0,
                "drag abandoned on unmount"
            );
            self.state.is_dragging = false;
            self.outbox.push(Effect::ReleasePointer {
                pointer: session.pointer_id,
            });
            self.outbox.push(Effect::SetDragging { active: false });
        }
        self.mounted = false;
        tracing::debug!(entity = %self.config.entity, "unmounted");
        self.drain()
    }

    fn fire(&mut self, kind: TimerKind) {
        tracing::trace!(entity = %self.config.entity, ?kind, at = ?self.now, "timer fired");
        match kind {
            TimerKind::Settle { animate } => {
                self.pending_settle = None;
                self.reposition(animate);
            }
            TimerKind::Dwell => self.finish_dwell(),
            TimerKind::Resync => self.reposition(true),
        }
    }

    /// Offset implied by the current entity state.
    fn resting_offset(&self) -> f64 {
        if self.is_affirmative() {
            self.layout.end_offset()
        } else {
            self.layout.start_offset()
        }
    }

    fn write_handle(&mut self, offset: f64, animate: bool) {
        self.state.handle_offset = offset;
        self.outbox.push(Effect::MoveHandle { offset, animate });
    }

    fn schedule(&mut self, delay: Duration, kind: TimerKind) -> Option<TimerHandle> {
        if !self.mounted {
            return None;
        }
        Some(self.timers.schedule(self.now.saturating_add(delay), kind))
    }

    fn drain(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.outbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> SlideConfirm {
        let config = SlideConfirmConfig {
            entity: "light.kitchen".into(),
            ..SlideConfirmConfig::default()
        };
        SlideConfirm::new(config, TrackLayout::with_widths(200.0, 50.0))
    }

    #[test]
    fn new_widget_is_idle_and_unplaced() {
        let widget = widget();

        assert_eq!(widget.state(), &WidgetState::default());
        assert_eq!(widget.phase(), ConfirmPhase::Idle);
        assert_eq!(widget.entity_state(), EntityState::unknown());
        assert!(!widget.is_affirmative());
        assert!(widget.is_mounted());
        assert_eq!(widget.next_deadline(), None);
    }

    #[test]
    fn advance_without_timers_only_moves_clock() {
        let mut widget = widget();

        assert!(widget.advance(Duration::from_millis(30)).is_empty());
        assert_eq!(widget.now(), Duration::from_millis(30));

        assert!(widget.advance_to(Duration::from_millis(10)).is_empty());
        assert_eq!(widget.now(), Duration::from_millis(30));
    }

    #[test]
    fn unmount_cancels_pending_timers() {
        let mut widget = widget();
        widget.on_external_update(EntityState::on());
        assert_eq!(widget.pending_timers(), 1);

        widget.unmount();
        assert_eq!(widget.pending_timers(), 0);
        assert!(widget.advance(Duration::from_secs(1)).is_empty());
        assert!(!widget.is_mounted());
        assert!(widget.unmount().is_empty());
    }

    #[test]
    fn set_layout_affects_next_placement() {
        let mut widget = widget();
        widget.on_external_update(EntityState::on());
        widget.set_layout(TrackLayout::with_widths(300.0, 60.0));

        let effects = widget.advance(Duration::from_millis(50));
        assert_eq!(
            effects,
            vec![Effect::MoveHandle {
                offset: 240.0,
                animate: false
            }]
        );
    }
}
