//! Build errors for the widget builder.

use crate::config::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a widget.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Configuration not specified. Call .config(config) before .build()")]
    MissingConfig,

    #[error("Configuration rejected with {} violation(s)", .0.len())]
    InvalidConfig(Vec<ConfigViolation>),
}
