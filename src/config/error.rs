//! Configuration error types.

use thiserror::Error;

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("entity is required")]
    MissingEntity,

    #[error("entity '{entity}' is not of the form <domain>.<object_id>")]
    MalformedEntity { entity: String },

    #[error("{action}.{field} must not be empty")]
    EmptyActionField {
        action: &'static str,
        field: &'static str,
    },

    #[error("timings.dwell_ms must be greater than zero")]
    ZeroDwell,
}

/// Errors returned when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("configuration has {} violation(s): {}", .0.len(), join(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lists_every_violation() {
        let err = ConfigError::Invalid(vec![
            ConfigViolation::MissingEntity,
            ConfigViolation::ZeroDwell,
        ]);

        assert_eq!(
            err.to_string(),
            "configuration has 2 violation(s): entity is required; \
             timings.dwell_ms must be greater than zero"
        );
    }

    #[test]
    fn empty_action_field_names_the_branch() {
        let violation = ConfigViolation::EmptyActionField {
            action: "action_when_on",
            field: "service",
        };
        assert_eq!(violation.to_string(), "action_when_on.service must not be empty");
    }
}
