use std::fmt;

use thiserror::Error;

/// A value that has the right shape but violates a range or format constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value for `{field}`: {value} (expected {expected})")]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `scheduleDefinition.pattern.day`.
    pub field: String,
    /// The offending value, rendered for diagnostics.
    pub value: String,
    /// Human-readable constraint the value failed.
    pub expected: String,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        value: impl fmt::Display,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            value: value.to_string(),
            expected: expected.into(),
        }
    }

    /// Re-root the field path under `prefix`.
    ///
    /// Model constructors report bare field names (`day`); decoders call this
    /// to turn them into full paths (`scheduleDefinition.pattern.day`).
    pub fn within(mut self, prefix: &str) -> Self {
        if prefix.is_empty() {
            return self;
        }
        self.field = if self.field.is_empty() {
            prefix.to_string()
        } else {
            format!("{}.{}", prefix, self.field)
        };
        self
    }
}

/// Result alias for model construction.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_prefixes_field_path() {
        let err = ValidationError::new("day", 32, "1..=31").within("scheduleDefinition.pattern");
        assert_eq!(err.field, "scheduleDefinition.pattern.day");
        assert_eq!(err.value, "32");
    }

    #[test]
    fn within_empty_prefix_is_identity() {
        let err = ValidationError::new("hour", 24, "0..=23").within("");
        assert_eq!(err.field, "hour");
    }

    #[test]
    fn display_names_field_and_value() {
        let err = ValidationError::new("hour", 24, "0..=23");
        assert_eq!(err.to_string(), "invalid value for `hour`: 24 (expected 0..=23)");
    }
}
