//! # Error Types
//!
//! This module defines all error types for the MML interpreter.
//!
//! Lexing errors carry the line and column of the offending token. Errors raised
//! while interpreting carry the rejected value instead.
//!
//! ## Error Types
//! - `ParseError` - Fatal lexer errors (`O`/`Y` without digits, oversized numbers)
//! - `InvalidOctave` - Octave assignment outside 1-10
//! - `InvalidLength` - Length denominator of zero
//! - `InvalidTempo` - Tempo of zero
//! - `ConfigError` - Unreadable or inconsistent player configuration
//!
//! Unrecognized characters are not errors: the lexer reports and skips them.
//!
//! ## Usage
//! ```rust
//! use mml::{interpret, MmlError};
//!
//! match interpret("O11C") {
//!     Ok(events) => println!("{} events", events.len()),
//!     Err(MmlError::InvalidOctave(value)) => eprintln!("bad octave {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MmlError {
    /// Fatal lexer error with location information.
    ///
    /// # Example
    /// ```
    /// # use mml::MmlError;
    /// let err = MmlError::ParseError {
    ///     line: 1,
    ///     column: 4,
    ///     message: "'O' requires a numeric argument".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Parse error at line 1, column 4: 'O' requires a numeric argument"
    /// );
    /// ```
    #[error("Parse error at line {line}, column {column}: {message}")]
    ParseError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Octave assignment outside the supported range.
    ///
    /// # Example
    /// ```
    /// # use mml::MmlError;
    /// let err = MmlError::InvalidOctave(11);
    /// assert_eq!(err.to_string(), "Octave 11 is outside the supported range 1-10");
    /// ```
    #[error("Octave {0} is outside the supported range 1-10")]
    InvalidOctave(u32),

    /// Length denominator that cannot be turned into a duration.
    #[error("Invalid note length: {0}")]
    InvalidLength(u32),

    /// Tempo that cannot be turned into a rhythm scalar.
    #[error("Invalid tempo: {0}")]
    InvalidTempo(u32),

    /// Invalid player configuration.
    ///
    /// # Example
    /// ```
    /// # use mml::MmlError;
    /// let err = MmlError::ConfigError("initial-octave must be between 1 and 10".to_string());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid configuration: initial-octave must be between 1 and 10"
    /// );
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
