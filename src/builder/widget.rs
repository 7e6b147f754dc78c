//! Builder for constructing widgets.

use crate::builder::error::BuildError;
use crate::config::{validate, SlideConfirmConfig, Timings};
use crate::core::{EntityState, Guard, TrackLayout};
use crate::widget::SlideConfirm;
use stillwater::validation::Validation;

/// Builder for a [`SlideConfirm`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use slide_confirm::config::SlideConfirmConfig;
/// use slide_confirm::core::{EntityState, TrackLayout};
/// use slide_confirm::SlideConfirm;
///
/// let config = SlideConfirmConfig {
///     entity: "lock.front_door".into(),
///     ..SlideConfirmConfig::default()
/// };
///
/// let widget = SlideConfirm::builder()
///     .config(config)
///     .layout(TrackLayout::with_widths(240.0, 48.0))
///     .when_affirmative(|s: &EntityState| s.as_str() == "locked")
///     .build()
///     .unwrap();
///
/// assert_eq!(widget.layout().end_offset(), 192.0);
/// ```
#[derive(Default)]
pub struct SlideConfirmBuilder {
    config: Option<SlideConfirmConfig>,
    layout: TrackLayout,
    timings: Option<Timings>,
    affirmative: Option<Guard<EntityState>>,
}

impl SlideConfirmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration (required).
    pub fn config(mut self, config: SlideConfirmConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Initial layout; hosts usually refine it with `set_layout` once the
    /// track is rendered.
    pub fn layout(mut self, layout: TrackLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Override the timings carried by the configuration.
    pub fn timings(mut self, timings: Timings) -> Self {
        self.timings = Some(timings);
        self
    }

    /// Replace the default `on`-only affirmative predicate.
    pub fn affirmative(mut self, guard: Guard<EntityState>) -> Self {
        self.affirmative = Some(guard);
        self
    }

    /// Same as [`affirmative`](Self::affirmative) from a closure.
    pub fn when_affirmative<F>(self, predicate: F) -> Self
    where
        F: Fn(&EntityState) -> bool + Send + Sync + 'static,
    {
        self.affirmative(Guard::new(predicate))
    }

    /// Validate the configuration and build the widget.
    pub fn build(self) -> Result<SlideConfirm, BuildError> {
        let mut config = self.config.ok_or(BuildError::MissingConfig)?;
        if let Some(timings) = self.timings {
            config.timings = timings;
        }

        if let Validation::Failure(errors) = validate(&config) {
            let violations: Vec<_> = errors.iter().cloned().collect();
            tracing::debug!(
                entity = %config.entity,
                violations = violations.len(),
                "configuration rejected"
            );
            return Err(BuildError::InvalidConfig(violations));
        }

        let timings = config.timings;
        let affirmative = self.affirmative.unwrap_or_else(Guard::entity_on);
        Ok(SlideConfirm::with_parts(
            config,
            self.layout,
            timings,
            affirmative,
        ))
    }
}
