//! Pure building blocks of the widget.
//!
//! This module contains the side-effect free pieces:
//! - State definitions via the `State` trait and the observed `EntityState`
//! - Guard predicates (the "affirmative" capability)
//! - Immutable history tracking
//! - Track geometry and the virtual-time timer queue

mod geometry;
mod guard;
mod history;
mod state;
mod timer;

pub use geometry::TrackLayout;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{EntityState, State};
pub use timer::{TimerHandle, TimerQueue};
