//! Access to the backing entity states.
//!
//! The widget is handed a source explicitly; it never reaches into a
//! shared registry on its own.

use crate::core::EntityState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Read-only lookup of entity states by identifier.
pub trait StateSource {
    /// Current state of `entity_id`, or `None` when the entity is absent.
    fn entity_state(&self, entity_id: &str) -> Option<EntityState>;
}

/// One entry of the host's live state map (`{ "state": "on", ... }`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub state: String,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl EntityRecord {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            attributes: serde_json::Map::new(),
        }
    }
}

impl StateSource for HashMap<String, EntityState> {
    fn entity_state(&self, entity_id: &str) -> Option<EntityState> {
        self.get(entity_id).cloned()
    }
}

impl StateSource for HashMap<String, EntityRecord> {
    fn entity_state(&self, entity_id: &str) -> Option<EntityState> {
        self.get(entity_id)
            .map(|record| EntityState::new(record.state.as_str()))
    }
}

/// Adapts a lookup closure into a [`StateSource`].
///
/// ```rust
/// use slide_confirm::core::EntityState;
/// use slide_confirm::source::{FnSource, StateSource};
///
/// let source = FnSource(|id: &str| (id == "light.desk").then(EntityState::on));
/// assert_eq!(source.entity_state("light.desk"), Some(EntityState::on()));
/// assert_eq!(source.entity_state("light.other"), None);
/// ```
pub struct FnSource<F>(pub F);

impl<F> StateSource for FnSource<F>
where
    F: Fn(&str) -> Option<EntityState>,
{
    fn entity_state(&self, entity_id: &str) -> Option<EntityState> {
        (self.0)(entity_id)
    }
}

impl<S: StateSource + ?Sized> StateSource for &S {
    fn entity_state(&self, entity_id: &str) -> Option<EntityState> {
        (**self).entity_state(entity_id)
    }
}
