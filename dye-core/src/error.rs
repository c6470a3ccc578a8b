//! Error types for recipe loading and dosage calculation.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Broad error categories surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Recipe table could not be fetched or parsed.
    DataLoadFailure,
    /// A required field is blank or a number could not be parsed.
    InvalidInput,
    /// No recipe for the requested color/fabric/width.
    NotFound,
    /// The recipe table was never loaded.
    DataUnavailable,
}

/// Main error type for the calculator.
#[derive(Debug, Error)]
pub enum DyeError {
    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("Invalid value for '{field}': expected an integer, got '{value}'")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Value {value} for '{field}' is out of range: {reason}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        reason: &'static str,
    },

    #[error("No recipe for color {color_id}, fabric {fabric}, width {width}")]
    NotFound {
        color_id: String,
        fabric: String,
        width: String,
    },

    #[error("Recipe data unavailable: {reason}")]
    DataUnavailable { reason: String },

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed recipe table: {0}")]
    Json(#[from] serde_json::Error),
}

impl DyeError {
    /// Get the error category for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DyeError::MissingField { .. } => ErrorCode::InvalidInput,
            DyeError::InvalidNumber { .. } => ErrorCode::InvalidInput,
            DyeError::OutOfRange { .. } => ErrorCode::InvalidInput,
            DyeError::NotFound { .. } => ErrorCode::NotFound,
            DyeError::DataUnavailable { .. } => ErrorCode::DataUnavailable,
            DyeError::Fetch { .. } => ErrorCode::DataLoadFailure,
            DyeError::ReadFile { .. } => ErrorCode::DataLoadFailure,
            DyeError::Json(_) => ErrorCode::DataLoadFailure,
        }
    }

    /// Whether this error comes from bad user input.
    pub fn is_invalid_input(&self) -> bool {
        self.code() == ErrorCode::InvalidInput
    }

    /// Whether this error means no recipe matched.
    pub fn is_not_found(&self) -> bool {
        self.code() == ErrorCode::NotFound
    }
}

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, DyeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_group_input_errors() {
        let missing = DyeError::MissingField { field: "color" };
        let range = DyeError::OutOfRange {
            field: "liters",
            value: -1,
            reason: "must not be negative",
        };
        let bad_number = "abc".parse::<i64>().unwrap_err();
        let number = DyeError::InvalidNumber {
            field: "liters",
            value: "abc".to_string(),
            source: bad_number,
        };

        assert!(missing.is_invalid_input());
        assert!(range.is_invalid_input());
        assert!(number.is_invalid_input());
        assert!(!number.is_not_found());
    }

    #[test]
    fn test_not_found_message() {
        let err = DyeError::NotFound {
            color_id: "1001".to_string(),
            fabric: "Cotone".to_string(),
            width: "15mm".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "No recipe for color 1001, fabric Cotone, width 15mm"
        );
    }

    #[test]
    fn test_json_error_is_load_failure() {
        let err: DyeError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), ErrorCode::DataLoadFailure);
    }
}
