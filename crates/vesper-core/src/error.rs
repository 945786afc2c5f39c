//! Error types for helper configuration.

use thiserror::Error;

/// Structured errors emitted while validating helper configuration.
///
/// Every helper validates its configuration at construction and fails fast
/// with one of these instead of rendering an inconsistent widget.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Two options carried the same value key.
    #[error("duplicate option value '{value}'")]
    DuplicateValue {
        /// The value that appeared more than once.
        value: String,
    },
    /// An option was missing its value key.
    #[error("option at position {index} has an empty value")]
    EmptyValue {
        /// Position of the offending option in the caller's list.
        index: usize,
    },
    /// An option was missing its display label.
    #[error("option '{value}' has an empty label")]
    EmptyLabel {
        /// Value key of the offending option.
        value: String,
    },
    /// A numeric threshold was negative, NaN, or infinite.
    #[error("invalid value for '{field}': {reason}")]
    InvalidThreshold {
        /// Name of the field that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
