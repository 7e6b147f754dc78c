//! Validation of widget configuration.
//!
//! Every rule runs; violations accumulate into a single `NonEmptyVec`
//! instead of stopping at the first problem.

use super::{Action, SlideConfirmConfig, Timings};
use crate::config::error::ConfigViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of running all configuration rules.
pub type ConfigValidation = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Run every rule against `config`.
pub fn validate(config: &SlideConfirmConfig) -> ConfigValidation {
    let checks = vec![
        check_entity(&config.entity),
        check_action("action_when_on", config.action_when_on.as_ref()),
        check_action("action_when_off", config.action_when_off.as_ref()),
        check_timings(&config.timings),
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn check_entity(entity: &str) -> ConfigValidation {
    let entity = entity.trim();
    if entity.is_empty() {
        return Validation::fail(ConfigViolation::MissingEntity);
    }

    match entity.split_once('.') {
        Some((domain, object_id)) if !domain.is_empty() && !object_id.is_empty() => {
            Validation::success(())
        }
        _ => Validation::fail(ConfigViolation::MalformedEntity {
            entity: entity.to_string(),
        }),
    }
}

fn check_action(name: &'static str, action: Option<&Action>) -> ConfigValidation {
    let Some(action) = action else {
        return Validation::success(());
    };

    let required = |field: &'static str, value: &str| {
        if value.trim().is_empty() {
            Validation::fail(ConfigViolation::EmptyActionField {
                action: name,
                field,
            })
        } else {
            Validation::success(())
        }
    };

    Validation::all_vec(vec![
        required("action", &action.action),
        required("service", &action.service),
    ])
    .map(|_| ())
}

fn check_timings(timings: &Timings) -> ConfigValidation {
    if timings.dwell_ms == 0 {
        Validation::fail(ConfigViolation::ZeroDwell)
    } else {
        Validation::success(())
    }
}
