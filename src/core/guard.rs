//! Guard predicates over states.
//!
//! Guards are pure boolean functions. The widget uses one to decide which
//! entity states count as "affirmative" (handle resting at the track end),
//! so multi-valued entities can be supported without touching the gesture
//! or confirmation logic.

use super::state::{EntityState, State};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate over a state.
///
/// # Example
///
/// ```rust
/// use slide_confirm::core::{EntityState, Guard};
///
/// let open_is_affirmative = Guard::new(|s: &EntityState| s.as_str() == "open");
///
/// assert!(open_is_affirmative.check(&EntityState::from("open")));
/// assert!(!open_is_affirmative.check(&EntityState::on()));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Evaluate the predicate without side effects.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl Guard<EntityState> {
    /// The default affirmative predicate: only the literal `on` state.
    ///
    /// `off`, `unknown` and any other value rest at the track start.
    pub fn entity_on() -> Self {
        Guard::new(EntityState::is_on)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_on_only_accepts_on() {
        let guard = Guard::entity_on();

        assert!(guard.check(&EntityState::on()));
        assert!(!guard.check(&EntityState::off()));
        assert!(!guard.check(&EntityState::unknown()));
        assert!(!guard.check(&EntityState::from("ON")));
    }

    #[test]
    fn custom_guard_supports_multi_valued_entities() {
        let guard = Guard::new(|s: &EntityState| matches!(s.as_str(), "open" | "opening"));

        assert!(guard.check(&EntityState::from("open")));
        assert!(guard.check(&EntityState::from("opening")));
        assert!(!guard.check(&EntityState::from("closed")));
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::entity_on();
        let cloned = guard.clone();

        assert_eq!(
            guard.check(&EntityState::on()),
            cloned.check(&EntityState::on())
        );
    }

    #[test]
    fn guard_is_deterministic() {
        let state = EntityState::unknown();
        let guard = Guard::entity_on();

        assert_eq!(guard.check(&state), guard.check(&state));
    }
}
