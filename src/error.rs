//! Error types for the payroll expression helpers.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the error conditions that scripts and the helpers can run into.
//! Missing row fields, empty selectors and empty averages are not errors:
//! they resolve to defaults (see the helper docs).

use thiserror::Error;

/// The main error type for the expression helpers.
///
/// # Example
///
/// ```
/// use payroll_expressions::error::ExpressionError;
///
/// let error = ExpressionError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ExpressionError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A business configuration entry was requested by name but does not exist.
    #[error("Business configuration not found: {name}")]
    ConfigValueNotFound {
        /// The name of the missing entry.
        name: String,
    },

    /// A business configuration entry exists but holds a value of the wrong type.
    #[error("Business configuration '{name}' is not a valid {expected}")]
    ConfigValueType {
        /// The name of the entry.
        name: String,
        /// The expected value type (e.g. "number").
        expected: String,
    },

    /// A date string was not in the `yyyy-MM-dd` form.
    #[error("Invalid date '{input}': {message}")]
    InvalidDate {
        /// The offending input.
        input: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// A row data payload of a known kind could not be decoded.
    #[error("Invalid row data of kind '{kind}': {message}")]
    InvalidRowData {
        /// The declared data kind.
        kind: String,
        /// A description of the decode failure.
        message: String,
    },

    /// A script hook rejected its input.
    #[error("Script '{script}' failed: {message}")]
    ScriptError {
        /// The name of the script hook.
        script: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return ExpressionError.
pub type ExpressionResult<T> = Result<T, ExpressionError>;
