//! Builder API for ergonomic widget construction.
//!
//! This module provides the fluent [`SlideConfirmBuilder`] and the
//! `state_enum!` macro used to declare simple state enums.

pub mod error;
pub mod macros;
pub mod widget;

pub use error::BuildError;
pub use widget::SlideConfirmBuilder;
