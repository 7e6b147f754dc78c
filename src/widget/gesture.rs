//! Pointer gesture handling.

use super::SlideConfirm;
use crate::effects::{Effect, PointerId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An open drag, from gesture start to gesture end.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureSession {
    pub pointer_id: PointerId,
    /// Handle offset the drag started from.
    pub start_offset: f64,
}

/// Why a gesture event was ignored. No state changed and no effect was
/// produced; hosts are free to drop these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GestureRejection {
    #[error("input is locked while the confirmation is shown")]
    Locked,

    #[error("a drag is already open for pointer {0}")]
    SessionOpen(PointerId),

    #[error("no drag is open")]
    NoSession,

    #[error("pointer {got} does not own the drag held by pointer {owner}")]
    ForeignPointer { owner: PointerId, got: PointerId },

    #[error("widget is unmounted")]
    Unmounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseOutcome {
    /// The handle reached the opposite end; `dispatched` is false when no
    /// action is configured for the branch.
    Confirmed { dispatched: bool },
    /// The handle is animating back to its resting position.
    Cancelled,
}

/// Result of a gesture end.
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub outcome: ReleaseOutcome,
    /// Final clamped handle offset at release.
    pub offset: f64,
    pub effects: Vec<Effect>,
}

impl SlideConfirm {
    /// Begin a drag with `pointer_id` pressed at `pointer_x`.
    ///
    /// The handle snaps, un-animated, to the offset implied by the current
    /// entity state so every drag has a deterministic origin.
    pub fn on_gesture_start(
        &mut self,
        pointer_id: PointerId,
        pointer_x: f64,
    ) -> Result<Vec<Effect>, GestureRejection> {
        if !self.mounted {
            return Err(self.reject(GestureRejection::Unmounted));
        }
        if self.state.is_confirmed {
            return Err(self.reject(GestureRejection::Locked));
        }
        if let Some(session) = &self.session {
            let owner = session.pointer_id;
            return Err(self.reject(GestureRejection::SessionOpen(owner)));
        }

        let start_offset = self.resting_offset();
        self.session = Some(GestureSession {
            pointer_id,
            start_offset,
        });
        self.state.is_dragging = true;
        tracing::debug!(
            entity = %self.config.entity,
            pointer = pointer_id.0,
            pointer_x,
            start_offset,
            "drag started"
        );

        self.outbox.push(Effect::SetDragging { active: true });
        self.outbox.push(Effect::CapturePointer {
            pointer: pointer_id,
        });
        self.write_handle(start_offset, false);
        Ok(self.drain())
    }

    /// Follow the captured pointer. Every call yields exactly one
    /// un-animated handle move; nothing is coalesced or throttled.
    pub fn on_gesture_move(&mut self, pointer_x: f64) -> Result<Vec<Effect>, GestureRejection> {
        if self.session.is_none() {
            return Err(self.reject(GestureRejection::NoSession));
        }
        let offset = self.layout.offset_for_pointer(pointer_x);
        self.write_handle(offset, false);
        Ok(self.drain())
    }

    /// Finish the drag held by `pointer_id`, released at `pointer_x` over an
    /// element `released_width` pixels wide.
    ///
    /// An affirmative entity confirms when the handle reached the start
    /// (`x <= 0`); otherwise when its far edge reached the track end
    /// (`x` at the clamp maximum for `released_width`). A collapsed track
    /// never confirms.
    pub fn on_gesture_end(
        &mut self,
        pointer_id: PointerId,
        pointer_x: f64,
        released_width: f64,
    ) -> Result<Release, GestureRejection> {
        let owner = match &self.session {
            Some(session) => session.pointer_id,
            None => return Err(self.reject(GestureRejection::NoSession)),
        };
        if owner != pointer_id {
            return Err(self.reject(GestureRejection::ForeignPointer {
                owner,
                got: pointer_id,
            }));
        }

        let x = self.layout.offset_for_pointer_with(pointer_x, released_width);

        self.session = None;
        self.state.is_dragging = false;
        self.outbox.push(Effect::ReleasePointer {
            pointer: pointer_id,
        });
        self.outbox.push(Effect::SetDragging { active: false });
        if x != self.state.handle_offset {
            self.write_handle(x, false);
        }

        let reached_end = if self.layout.is_collapsed() {
            false
        } else if self.is_affirmative() {
            x <= 0.0
        } else {
            x >= self.layout.max_offset_for(released_width)
        };

        let outcome = if reached_end && !self.state.is_confirmed {
            let dispatched = self.begin_confirmation();
            ReleaseOutcome::Confirmed { dispatched }
        } else {
            self.reposition(true);
            ReleaseOutcome::Cancelled
        };
        tracing::debug!(
            entity = %self.config.entity,
            pointer = pointer_id.0,
            offset = x,
            ?outcome,
            "drag ended"
        );

        Ok(Release {
            outcome,
            offset: x,
            effects: self.drain(),
        })
    }

    fn reject(&self, rejection: GestureRejection) -> GestureRejection {
        tracing::debug!(entity = %self.config.entity, %rejection, "gesture ignored");
        rejection
    }
}
