//! Core flight types for flightregistry.
//!
//! This module defines the flight record stored by the registry and the
//! enumerated flight status, along with timestamp parsing.

use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, TimestampError};

/// Format of departure and arrival timestamps (`YYYY-MM-DD HH:MM`, no zone).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The operational status of a flight.
///
/// Serialized as its display string, so `OnTime` is `"ON TIME"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The flight is running to schedule.
    #[serde(rename = "ON TIME")]
    OnTime,
    /// The flight is late.
    #[serde(rename = "DELAYED")]
    Delayed,
    /// The flight will not operate.
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl Status {
    /// All statuses, in declaration order.
    pub const ALL: [Status; 3] = [Status::OnTime, Status::Delayed, Status::Cancelled];

    /// The fixed display string for this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnTime => "ON TIME",
            Self::Delayed => "DELAYED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}

/// Parse a timestamp in [`TIMESTAMP_FORMAT`].
///
/// The value must be exactly `YYYY-MM-DD HH:MM`: zero-padded fields, one
/// space between date and time, no surrounding whitespace. chrono alone
/// accepts looser input such as `2024-1-1 9:5`.
///
/// # Errors
///
/// Returns [`TimestampError::Layout`] if the value is not laid out as above,
/// or [`TimestampError::OutOfRange`] if it names a date or time that does
/// not exist.
pub fn parse_timestamp(value: &str) -> std::result::Result<NaiveDateTime, TimestampError> {
    if !has_timestamp_layout(value.as_bytes()) {
        return Err(TimestampError::Layout);
    }
    Ok(NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)?)
}

fn has_timestamp_layout(bytes: &[u8]) -> bool {
    bytes.len() == 16
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            10 => b == b' ',
            13 => b == b':',
            _ => b.is_ascii_digit(),
        })
}

/// A single flight tracked by the registry.
///
/// Timestamps are kept as the strings they arrived with and are only parsed
/// when a duration is computed, so a record with a missing or malformed time
/// can still be stored and listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Identifier, unique within a registry.
    pub flight_number: String,

    /// Scheduled departure, `YYYY-MM-DD HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,

    /// Scheduled arrival, `YYYY-MM-DD HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,

    /// Current status, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// Minutes from departure to arrival; absent until computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
}

impl FlightRecord {
    /// Create a record with both timestamps and a status.
    #[must_use]
    pub fn new(
        flight_number: impl Into<String>,
        departure_time: impl Into<String>,
        arrival_time: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            departure_time: Some(departure_time.into()),
            arrival_time: Some(arrival_time.into()),
            status: Some(status),
            duration_minutes: None,
        }
    }

    /// Create a record carrying only its flight number.
    #[must_use]
    pub fn bare(flight_number: impl Into<String>) -> Self {
        Self {
            flight_number: flight_number.into(),
            departure_time: None,
            arrival_time: None,
            status: None,
            duration_minutes: None,
        }
    }

    /// Check whether this record has the given status.
    ///
    /// Records without a status never match.
    #[must_use]
    pub fn has_status(&self, status: Status) -> bool {
        self.status == Some(status)
    }

    /// Parse the departure timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or malformed.
    pub fn departure(&self) -> Result<NaiveDateTime> {
        self.timestamp("departure_time", self.departure_time.as_deref())
    }

    /// Parse the arrival timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or malformed.
    pub fn arrival(&self) -> Result<NaiveDateTime> {
        self.timestamp("arrival_time", self.arrival_time.as_deref())
    }

    /// Compute the flight duration in whole minutes without storing it.
    ///
    /// Partial minutes are truncated toward zero. The result is negative when
    /// arrival precedes departure.
    ///
    /// # Errors
    ///
    /// Returns an error if either timestamp is absent or malformed.
    pub fn duration(&self) -> Result<i64> {
        let departure = self.departure()?;
        let arrival = self.arrival()?;
        Ok((arrival - departure).num_minutes())
    }

    fn timestamp(&self, field: &'static str, value: Option<&str>) -> Result<NaiveDateTime> {
        let value = value.ok_or_else(|| Error::missing_timestamp(&self.flight_number, field))?;
        parse_timestamp(value)
            .map_err(|source| Error::timestamp_parse(&self.flight_number, field, value, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(Status::OnTime.to_string(), "ON TIME");
        assert_eq!(Status::Delayed.to_string(), "DELAYED");
        assert_eq!(Status::Cancelled.to_string(), "CANCELLED");
    }

    #[test]
    fn test_status_as_str_matches_display() {
        for status in Status::ALL {
            assert_eq!(status.as_str(), status.to_string());
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("ON TIME".parse::<Status>().unwrap(), Status::OnTime);
        assert_eq!("DELAYED".parse::<Status>().unwrap(), Status::Delayed);
        assert_eq!("CANCELLED".parse::<Status>().unwrap(), Status::Cancelled);
    }

    #[test]
    fn test_status_from_str_is_exact() {
        assert!("on time".parse::<Status>().is_err());
        assert!("ON_TIME".parse::<Status>().is_err());
        assert!(matches!(
            "Delayed".parse::<Status>(),
            Err(Error::UnknownStatus(s)) if s == "Delayed"
        ));
    }

    #[test]
    fn test_status_serializes_as_display_string() {
        assert_eq!(serde_json::to_string(&Status::OnTime).unwrap(), "\"ON TIME\"");
        let status: Status = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, Status::Cancelled);
    }

    #[test]
    fn test_record_new() {
        let record = FlightRecord::new(
            "F1",
            "2024-01-01 10:00",
            "2024-01-01 12:30",
            Status::OnTime,
        );
        assert_eq!(record.flight_number, "F1");
        assert_eq!(record.status, Some(Status::OnTime));
        assert!(record.duration_minutes.is_none());
    }

    #[test]
    fn test_duration_minutes() {
        let record = FlightRecord::new(
            "F1",
            "2024-01-01 10:00",
            "2024-01-01 12:30",
            Status::OnTime,
        );
        assert_eq!(record.duration().unwrap(), 150);
    }

    #[test]
    fn test_duration_across_midnight() {
        let record = FlightRecord::new(
            "RED1",
            "2024-03-09 23:15",
            "2024-03-10 06:05",
            Status::Delayed,
        );
        assert_eq!(record.duration().unwrap(), 410);
    }

    #[test]
    fn test_duration_negative() {
        let record = FlightRecord::new(
            "BACK",
            "2024-01-01 12:00",
            "2024-01-01 11:00",
            Status::OnTime,
        );
        assert_eq!(record.duration().unwrap(), -60);
    }

    #[test]
    fn test_duration_missing_field() {
        let record = FlightRecord::bare("NONE");
        let err = record.duration().unwrap_err();
        assert!(matches!(
            err,
            Error::MissingTimestamp { field: "departure_time", .. }
        ));
    }

    #[test]
    fn test_duration_malformed_field() {
        let mut record = FlightRecord::new(
            "BAD",
            "2024-01-01 10:00",
            "2024-01-01T12:30:00Z",
            Status::OnTime,
        );
        let err = record.duration().unwrap_err();
        assert!(matches!(
            err,
            Error::TimestampParse { field: "arrival_time", ref value, .. } if value == "2024-01-01T12:30:00Z"
        ));

        record.arrival_time = Some("2024-13-01 10:00".to_string());
        assert!(matches!(
            record.duration(),
            Err(Error::TimestampParse { source: TimestampError::OutOfRange(_), .. })
        ));

        for bad in [
            "2024-01-0110:00",
            " 2024-01-01 10:00",
            "2024-01-01 10:00 ",
            "2024-01-01   10:00",
            "2024-1-1 9:5",
            "2024-01-01T10:00",
            "+024-01-01 10:00",
            "",
        ] {
            record.arrival_time = Some(bad.to_string());
            assert!(
                matches!(
                    record.duration(),
                    Err(Error::TimestampParse { source: TimestampError::Layout, .. })
                ),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_timestamp_exact_layout() {
        let parsed = parse_timestamp("2024-01-01 09:05").unwrap();
        assert_eq!(parsed.to_string(), "2024-01-01 09:05:00");
        assert_eq!(parse_timestamp("2024-1-1 9:5"), Err(TimestampError::Layout));
        assert_eq!(parse_timestamp("2024-01-01 10:00\n"), Err(TimestampError::Layout));
    }

    #[test]
    fn test_has_status() {
        let record = FlightRecord::new("F2", "2024-01-01 09:00", "2024-01-01 09:45", Status::Delayed);
        assert!(record.has_status(Status::Delayed));
        assert!(!record.has_status(Status::OnTime));
        assert!(!FlightRecord::bare("F3").has_status(Status::Delayed));
    }

    #[test]
    fn test_record_serialization() {
        let mut record = FlightRecord::new(
            "F1",
            "2024-01-01 10:00",
            "2024-01-01 12:30",
            Status::OnTime,
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "ON TIME");
        assert!(json.get("duration_minutes").is_none());

        record.duration_minutes = Some(150);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"duration_minutes\":150"));
    }

    #[test]
    fn test_record_deserialize_with_missing_fields() {
        let record: FlightRecord = serde_json::from_str(r#"{"flight_number": "LONE"}"#).unwrap();
        assert_eq!(record, FlightRecord::bare("LONE"));
    }

    #[test]
    fn test_record_deserialize_rejects_unknown_status() {
        let result: std::result::Result<FlightRecord, _> =
            serde_json::from_str(r#"{"flight_number": "X", "status": "BOARDING"}"#);
        assert!(result.is_err());
    }
}
