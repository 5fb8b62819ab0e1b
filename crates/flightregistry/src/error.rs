//! Error types for flightregistry.
//!
//! Only genuine faults are errors here. Rejected duplicates and removals of
//! unknown flight numbers are ordinary outcomes and are reported through
//! return values instead.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flightregistry operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Record Errors ===
    /// A record lacks a timestamp needed to compute its duration.
    #[error("flight {flight_number}: missing {field}")]
    MissingTimestamp {
        /// Flight number of the offending record.
        flight_number: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A timestamp did not match the `YYYY-MM-DD HH:MM` format.
    #[error("flight {flight_number}: invalid {field} '{value}': {source}")]
    TimestampParse {
        /// Flight number of the offending record.
        flight_number: String,
        /// Name of the field that failed to parse.
        field: &'static str,
        /// The raw value as stored on the record.
        value: String,
        /// Why the value was rejected.
        #[source]
        source: TimestampError,
    },

    /// A status string is not one of the recognized display strings.
    #[error("unknown flight status '{0}' (expected ON TIME, DELAYED or CANCELLED)")]
    UnknownStatus(String),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read a flights file.
    #[error("failed to read flights from {path}: {source}")]
    FileRead {
        /// Path that couldn't be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a single timestamp string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The value is not laid out as `YYYY-MM-DD HH:MM`.
    #[error("expected YYYY-MM-DD HH:MM")]
    Layout,

    /// The layout is right but the date or time does not exist.
    #[error(transparent)]
    OutOfRange(#[from] chrono::ParseError),
}

/// A specialized Result type for flightregistry operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a missing timestamp error.
    #[must_use]
    pub fn missing_timestamp(flight_number: impl Into<String>, field: &'static str) -> Self {
        Self::MissingTimestamp {
            flight_number: flight_number.into(),
            field,
        }
    }

    /// Create a timestamp parse error.
    #[must_use]
    pub fn timestamp_parse(
        flight_number: impl Into<String>,
        field: &'static str,
        value: impl Into<String>,
        source: TimestampError,
    ) -> Self {
        Self::TimestampParse {
            flight_number: flight_number.into(),
            field,
            value: value.into(),
            source,
        }
    }

    /// Check if this error came from reading a record's timestamps.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MissingTimestamp { .. } | Self::TimestampParse { .. }
        )
    }
}
