//! slide-confirm: the interaction core of a slide-to-confirm toggle.
//!
//! The user drags a handle from one end of a track to the other to confirm
//! an action on a binary-state entity. Three authorities compete for the
//! handle's position: the entity state pushed by the backing system, the
//! user's pointer, and the short "confirmed" lock after a successful slide.
//! [`SlideConfirm`] decides who owns the handle at every moment.
//!
//! The crate follows a "pure core, imperative shell" split. The host feeds
//! in entity states, pointer coordinates, layout measurements and elapsed
//! time; the widget answers with [`Effect`]s to apply. Nothing here touches
//! a rendering surface, a clock or a global registry.
//!
//! # Example
//!
//! ```rust
//! use slide_confirm::config::{Action, SlideConfirmConfig};
//! use slide_confirm::core::{EntityState, TrackLayout};
//! use slide_confirm::effects::{Effect, PointerId};
//! use slide_confirm::widget::ReleaseOutcome;
//! use slide_confirm::SlideConfirm;
//! use std::time::Duration;
//!
//! let config = SlideConfirmConfig {
//!     entity: "light.porch".into(),
//!     action_when_off: Some(Action {
//!         action: "call-service".into(),
//!         service: "light.turn_on".into(),
//!         ..Action::default()
//!     }),
//!     ..SlideConfirmConfig::default()
//! };
//! let mut widget = SlideConfirm::builder()
//!     .config(config)
//!     .layout(TrackLayout::with_widths(200.0, 50.0))
//!     .build()
//!     .unwrap();
//!
//! widget.on_external_update(EntityState::off());
//! widget.advance(Duration::from_millis(50));
//!
//! let pointer = PointerId(1);
//! widget.on_gesture_start(pointer, 25.0).unwrap();
//! widget.on_gesture_move(175.0).unwrap();
//! let release = widget.on_gesture_end(pointer, 175.0, 50.0).unwrap();
//!
//! assert_eq!(release.outcome, ReleaseOutcome::Confirmed { dispatched: true });
//! assert!(release.effects.iter().any(Effect::is_dispatch));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;
pub mod source;
pub mod view;
pub mod widget;

// Re-export commonly used types
pub use builder::{BuildError, SlideConfirmBuilder};
pub use config::{Action, SlideConfirmConfig, Timings};
pub use crate::core::{EntityState, Guard, TrackLayout};
pub use effects::{ActionEvent, Effect, PointerId};
pub use source::StateSource;
pub use widget::{ConfirmPhase, GestureRejection, Release, ReleaseOutcome, SlideConfirm};
