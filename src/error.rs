//! Error types for the fatigue and compliance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while evaluating shift sequences
//! or checking assignment histories.

use thiserror::Error;

/// The main error type for the engine.
///
/// All fallible operations return this error type. Missing optional
/// parameters are never errors; they resolve to configured defaults.
///
/// # Example
///
/// ```
/// use fatigue_engine::error::EngineError;
///
/// let error = EngineError::InvalidShiftTime {
///     value: "25:99".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid shift time '25:99': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A clock time could not be parsed as `HH:MM`.
    #[error("Invalid shift time '{value}': expected HH:MM")]
    InvalidShiftTime {
        /// The offending input.
        value: String,
    },

    /// Shift `day` values decreased along the sequence.
    #[error("Invalid sequence order at index {index}: day {day} follows day {previous_day}")]
    InvalidSequenceOrder {
        /// Position of the out-of-order shift.
        index: usize,
        /// Day number of the preceding shift.
        previous_day: u32,
        /// Day number of the out-of-order shift.
        day: u32,
    },

    /// An assignment referenced a shift pattern that was not supplied.
    #[error("Unknown shift pattern: {pattern_id}")]
    UnknownShiftPattern {
        /// The pattern ID that could not be resolved.
        pattern_id: String,
    },

    /// A fatigue parameter was outside its allowed range.
    #[error("Invalid parameter '{field}': {message}")]
    InvalidParameter {
        /// The parameter name.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

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
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
