//! Directives the widget hands back to its host.
//!
//! The core never touches a rendering surface or the backing system.
//! Every operation returns the effects the host must apply, in order.

use crate::config::Action;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a pointer (mouse, pen or touch contact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerId(pub i64);

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of the event carrying a confirmed action.
pub const CALL_ACTION_EVENT: &str = "call-action";

/// Output event emitted once per confirmed slide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub detail: Action,
    /// Propagates to ancestors.
    pub bubbles: bool,
    /// Crosses shadow-root boundaries.
    pub composed: bool,
}

impl ActionEvent {
    pub fn call_action(detail: Action) -> Self {
        Self {
            kind: CALL_ACTION_EVENT.to_string(),
            detail,
            bubbles: true,
            composed: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// Place the handle at `offset` pixels from the track start.
    MoveHandle { offset: f64, animate: bool },
    CapturePointer { pointer: PointerId },
    ReleasePointer { pointer: PointerId },
    /// Toggle the "dragging" visual class on the handle.
    SetDragging { active: bool },
    /// Toggle the "confirmed" visual class on the container.
    SetConfirmed { active: bool },
    Dispatch { event: ActionEvent },
}

impl Effect {
    pub fn is_dispatch(&self) -> bool {
        matches!(self, Self::Dispatch { .. })
    }

    /// Offset and animation flag when this effect moves the handle.
    pub fn handle_move(&self) -> Option<(f64, bool)> {
        match self {
            Self::MoveHandle { offset, animate } => Some((*offset, *animate)),
            _ => None,
        }
    }
}
