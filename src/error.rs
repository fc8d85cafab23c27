//! Error types for the deadline engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! decomposing dates and fetching holidays.

use thiserror::Error;

/// The main error type for the deadline engine.
///
/// Holiday fetch failures are recovered inside
/// [`HolidayEngine::load_holidays`](crate::holidays::HolidayEngine::load_holidays)
/// and never reach its callers; the remaining variants surface from
/// configuration loading, date parsing and the HTTP layer.
///
/// # Example
///
/// ```
/// use deadline_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
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

    /// A date string could not be decomposed into year, month and day.
    #[error("Invalid date '{input}': {message}")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        message: String,
    },

    /// The holiday source could not be queried.
    #[error("Holiday source unavailable: {message}")]
    HolidaySourceUnavailable {
        /// A description of the failure.
        message: String,
    },

    /// A query parameter was missing or out of range.
    #[error("Invalid query: {message}")]
    InvalidQuery {
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_date_displays_input_and_message() {
        let error = EngineError::InvalidDate {
            input: "2026-13-01".to_string(),
            message: "no such calendar date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '2026-13-01': no such calendar date"
        );
    }

    #[test]
    fn test_holiday_source_unavailable_displays_message() {
        let error = EngineError::HolidaySourceUnavailable {
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Holiday source unavailable: connection refused"
        );
    }

    #[test]
    fn test_invalid_query_displays_message() {
        let error = EngineError::InvalidQuery {
            message: "month must be between 1 and 12".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid query: month must be between 1 and 12"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_date() -> EngineResult<()> {
            Err(EngineError::InvalidDate {
                input: "x".to_string(),
                message: "expected YYYY-MM-DD".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_date()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
