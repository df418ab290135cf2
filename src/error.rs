//! Error types for the Cost Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! looking up records and validating calculation inputs.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Cost Engine.
///
/// The pure calculators never fail; these errors come from configuration
/// loading, lookups and input validation at the service boundary.
///
/// # Example
///
/// ```
/// use cost_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "func_099".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: func_099");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// No employee with the given id exists in the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was requested.
        id: String,
    },

    /// No client with the given code exists in the directory.
    #[error("Client not found: {code}")]
    ClientNotFound {
        /// The client code that was requested.
        code: String,
    },

    /// A monetary input was outside the accepted range.
    #[error("Invalid amount for '{field}' ({value}): {message}")]
    InvalidAmount {
        /// The input field that was rejected.
        field: String,
        /// The rejected value.
        value: Decimal,
        /// A description of why the value was rejected.
        message: String,
    },

    /// A quote was incomplete or contained inconsistent data.
    #[error("Invalid quote: {message}")]
    InvalidQuote {
        /// A description of what made the quote invalid.
        message: String,
    },

    /// A time-entry duration was not in `H:MM` form.
    #[error("Invalid duration '{value}': {message}")]
    InvalidDuration {
        /// The rejected text.
        value: String,
        /// A description of why the text was rejected.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
