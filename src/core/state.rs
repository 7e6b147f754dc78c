//! Core State trait and the external entity state.
//!
//! All state machine states implement [`State`], which provides pure
//! methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for persistence
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Status string reported by the backing data source for an entity.
///
/// The widget never owns this value, it only observes it. Well-known values
/// are `on`, `off` and `unknown`; anything else is carried through verbatim
/// so presentation can surface it.
///
/// # Example
///
/// ```rust
/// use slide_confirm::core::EntityState;
///
/// assert!(EntityState::on().is_on());
/// assert!(EntityState::new("").is_unknown());
/// assert_eq!(EntityState::from("open").as_str(), "open");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityState(String);

impl EntityState {
    pub const ON: &'static str = "on";
    pub const OFF: &'static str = "off";
    pub const UNKNOWN: &'static str = "unknown";

    /// Wrap a raw status string. Empty strings collapse to `unknown`.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() {
            Self::unknown()
        } else {
            Self(raw)
        }
    }

    pub fn on() -> Self {
        Self(Self::ON.to_string())
    }

    pub fn off() -> Self {
        Self(Self::OFF.to_string())
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_on(&self) -> bool {
        self.0 == Self::ON
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }
}

impl Default for EntityState {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<&str> for EntityState {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for EntityState {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for EntityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl State for EntityState {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn is_error(&self) -> bool {
        self.is_unknown()
    }
}
