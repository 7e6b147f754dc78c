//! Presentation model for the host's renderer.

use crate::config::SlideConfirmConfig;
use crate::core::EntityState;
use serde::Serialize;

/// Text shown while the confirmed visual is active.
pub const CONFIRMED_TEXT: &str = "Action completed!";

/// Which end of the track the handle rests at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Everything a renderer needs to draw the widget for the current state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Presentation {
    pub name: Option<String>,
    pub label: Option<String>,
    pub icon: Option<String>,
    /// Raw entity state, `unknown` included.
    pub entity_state: EntityState,
    pub affirmative: bool,
    pub text: String,
    pub state_icon: String,
    pub color: Option<String>,
    pub confirmed: bool,
}

impl Presentation {
    pub fn build(
        config: &SlideConfirmConfig,
        entity_state: EntityState,
        affirmative: bool,
        confirmed: bool,
    ) -> Self {
        Self {
            name: non_empty(config.name.as_deref()),
            label: non_empty(config.label.as_deref()),
            icon: non_empty(config.icon.as_deref()),
            entity_state,
            affirmative,
            text: config.text_for(affirmative).to_string(),
            state_icon: config.icon_for(affirmative).to_string(),
            color: config.color_for(affirmative).map(str::to_string),
            confirmed,
        }
    }

    pub fn container_class(&self) -> &'static str {
        if self.affirmative {
            "entity-on"
        } else {
            "entity-off"
        }
    }

    pub fn position(&self) -> Side {
        if self.affirmative {
            Side::Right
        } else {
            Side::Left
        }
    }

    /// Inline style carrying the state color, if one is configured.
    pub fn style(&self) -> Option<String> {
        self.color
            .as_deref()
            .map(|color| format!("--slider-color: {color};"))
    }

    /// Text currently visible on the track.
    pub fn visible_text(&self) -> &str {
        if self.confirmed {
            CONFIRMED_TEXT
        } else {
            &self.text
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
