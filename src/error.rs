//! Error types for the colony engine.
//!
//! Every fallible condition is a validation failure detected once, at the
//! boundary, before any iteration starts.

use thiserror::Error;

/// Result type alias for colony operations.
pub type AcoResult<T> = Result<T, AcoError>;

/// Unified error type for all colony operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// Invalid configuration or an instance on which a tour is undefined.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the rejected value.
        message: String,
    },

    /// Malformed `id x y` row in a city listing.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number of the offending row.
        line: usize,
        /// What was wrong with the row.
        message: String,
    },
}

impl AcoError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        AcoError::Configuration {
            message: message.into(),
        }
    }

    /// Creates a parse error for the given 1-based line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        AcoError::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = AcoError::config("population_size must be positive");
        assert_eq!(
            err.to_string(),
            "configuration error: population_size must be positive"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = AcoError::parse(3, "expected 3 columns, got 2");
        assert_eq!(
            err.to_string(),
            "parse error on line 3: expected 3 columns, got 2"
        );
    }
}
