//! Per-instance widget configuration.
//!
//! The configuration is plain serde data, usually parsed from the
//! dashboard's JSON card definition:
//!
//! ```rust
//! use slide_confirm::config::SlideConfirmConfig;
//!
//! let config = SlideConfirmConfig::from_json(r#"{
//!     "entity": "light.porch",
//!     "text_when_off": "Slide to light the porch",
//!     "action_when_off": {
//!         "action": "call-service",
//!         "service": "light.turn_on",
//!         "target": { "entity_id": "light.porch" }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(config.timings.dwell_ms, 1500);
//! assert!(config.action_when_on.is_none());
//! ```

mod error;
mod validation;

pub use error::{ConfigError, ConfigViolation};
pub use validation::{validate, ConfigValidation};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use stillwater::validation::Validation;

pub const DEFAULT_TEXT_WHEN_ON: &str = "Slide to turn off";
pub const DEFAULT_TEXT_WHEN_OFF: &str = "Slide to turn on";
pub const DEFAULT_ICON_WHEN_ON: &str = "mdi:lightbulb-on";
pub const DEFAULT_ICON_WHEN_OFF: &str = "mdi:lightbulb-off";

/// Configuration of one widget instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideConfirmConfig {
    #[serde(default)]
    pub entity: String,
    pub name: Option<String>,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub icon_when_on: Option<String>,
    pub icon_when_off: Option<String>,
    pub text_when_on: Option<String>,
    pub text_when_off: Option<String>,
    pub color_when_on: Option<String>,
    pub color_when_off: Option<String>,
    /// Dispatched when a slide is confirmed while the entity is affirmative.
    pub action_when_on: Option<Action>,
    /// Dispatched when a slide is confirmed while the entity is not.
    pub action_when_off: Option<Action>,
    #[serde(default)]
    pub timings: Timings,
}

impl SlideConfirmConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Run all validation rules, returning every violation on failure.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match validate(&self) {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// Action for the branch implied by the current entity state.
    pub fn action_for(&self, affirmative: bool) -> Option<&Action> {
        if affirmative {
            self.action_when_on.as_ref()
        } else {
            self.action_when_off.as_ref()
        }
    }

    pub fn text_for(&self, affirmative: bool) -> &str {
        if affirmative {
            self.text_when_on.as_deref().unwrap_or(DEFAULT_TEXT_WHEN_ON)
        } else {
            self.text_when_off.as_deref().unwrap_or(DEFAULT_TEXT_WHEN_OFF)
        }
    }

    pub fn icon_for(&self, affirmative: bool) -> &str {
        if affirmative {
            self.icon_when_on.as_deref().unwrap_or(DEFAULT_ICON_WHEN_ON)
        } else {
            self.icon_when_off.as_deref().unwrap_or(DEFAULT_ICON_WHEN_OFF)
        }
    }

    pub fn color_for(&self, affirmative: bool) -> Option<&str> {
        if affirmative {
            self.color_when_on.as_deref()
        } else {
            self.color_when_off.as_deref()
        }
    }
}

/// Directive handed to the host on confirmation. The widget never
/// interprets it beyond cloning it into the output event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub action: String,
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ActionTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<OneOrMany>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<OneOrMany>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<OneOrMany>,
}

/// A single id or a list of ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::One(id) => vec![id.as_str()],
            Self::Many(ids) => ids.iter().map(String::as_str).collect(),
        }
    }
}

/// Delays driving the settle, dwell and resync timers, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Settle delay before the very first, un-animated placement.
    pub first_settle_ms: u64,
    /// Settle delay before animated placements after state changes.
    pub settle_ms: u64,
    /// How long the confirmed visual stays locked.
    pub dwell_ms: u64,
    /// Delay between the end of the dwell and the resync.
    pub resync_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            first_settle_ms: 50,
            settle_ms: 10,
            dwell_ms: 1500,
            resync_ms: 100,
        }
    }
}

impl Timings {
    pub fn settle(&self, first_observation: bool) -> Duration {
        if first_observation {
            Duration::from_millis(self.first_settle_ms)
        } else {
            Duration::from_millis(self.settle_ms)
        }
    }

    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }

    pub fn resync(&self) -> Duration {
        Duration::from_millis(self.resync_ms)
    }
}
