//! Post-confirmation sequencing: lock, dwell, revert, resync.

use super::{SlideConfirm, TimerKind};
use crate::core::StateTransition;
use crate::effects::{ActionEvent, Effect};
use crate::state_enum;

state_enum! {
    /// Phase of the confirmation sequence.
    #[derive(Copy, Eq)]
    pub enum ConfirmPhase {
        /// Accepting gestures.
        Idle,
        /// Showing the confirmed visual; gestures are rejected.
        Confirming,
    }
}

impl SlideConfirm {
    /// Enter `Confirming`: lock input, show the confirmed visual, dispatch
    /// the branch's action once and start the dwell timer.
    ///
    /// Returns whether an action event was emitted.
    pub(super) fn begin_confirmation(&mut self) -> bool {
        let affirmative = self.is_affirmative();
        self.state.is_confirmed = true;
        self.enter_phase(ConfirmPhase::Confirming);
        self.outbox.push(Effect::SetConfirmed { active: true });

        let dispatched = match self.config.action_for(affirmative) {
            Some(action) => {
                let event = ActionEvent::call_action(action.clone());
                tracing::debug!(
                    entity = %self.config.entity,
                    service = %event.detail.service,
                    "dispatching confirmed action"
                );
                self.outbox.push(Effect::Dispatch { event });
                true
            }
            None => {
                tracing::debug!(
                    entity = %self.config.entity,
                    affirmative,
                    "no action configured for this branch"
                );
                false
            }
        };

        self.schedule(self.timings.dwell(), TimerKind::Dwell);
        dispatched
    }

    /// Dwell expired: unlock, drop the confirmed visual and give the backing
    /// system a moment to reflect the action before resyncing.
    pub(super) fn finish_dwell(&mut self) {
        self.state.is_confirmed = false;
        self.enter_phase(ConfirmPhase::Idle);
        self.outbox.push(Effect::SetConfirmed { active: false });
        self.schedule(self.timings.resync(), TimerKind::Resync);
    }

    fn enter_phase(&mut self, to: ConfirmPhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        self.phase_history = self.phase_history.record(StateTransition {
            from,
            to,
            at: self.now,
        });
        tracing::debug!(entity = %self.config.entity, %from, %to, "confirm phase changed");
    }
}
