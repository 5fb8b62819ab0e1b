//! The in-memory flight registry.
//!
//! [`FlightRegistry`] owns an insertion-ordered collection of
//! [`FlightRecord`]s keyed by flight number, and provides status filtering
//! and duration queries over it. Nothing is persisted.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::flight::{FlightRecord, Status};

/// Outcome of adding a record to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum AddOutcome {
    /// The record was appended.
    Inserted,
    /// A record with the same flight number already exists; nothing changed.
    DuplicateRejected,
}

impl AddOutcome {
    /// Check whether the record was appended.
    #[must_use]
    pub fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// Summary counts over the registry's current records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Total number of records.
    pub total: usize,
    /// Records with status `ON TIME`.
    pub on_time: usize,
    /// Records with status `DELAYED`.
    pub delayed: usize,
    /// Records with status `CANCELLED`.
    pub cancelled: usize,
    /// Records with no status.
    pub unknown: usize,
    /// Records whose duration has been computed.
    pub with_duration: usize,
}

/// An ordered collection of flight records with unique flight numbers.
///
/// The registry assumes a single caller. Wrap it in a lock if it has to be
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct FlightRegistry {
    flights: Vec<FlightRecord>,
}

impl FlightRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry by adding each record in turn.
    ///
    /// Later records that repeat an earlier flight number are rejected exactly
    /// as [`add`](Self::add) would reject them.
    pub fn from_records(records: impl IntoIterator<Item = FlightRecord>) -> Self {
        let mut registry = Self::new();
        for record in records {
            let _ = registry.add(record);
        }
        registry
    }

    /// Import records from a JSON file holding an array of flights.
    ///
    /// The file is only read; the registry is never written back.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid array of
    /// flight records.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<FlightRecord> = serde_json::from_str(&contents)?;
        let offered = records.len();
        let registry = Self::from_records(records);

        info!(
            "Loaded {} of {} flights from {}",
            registry.len(),
            offered,
            path.display()
        );
        Ok(registry)
    }

    /// Append a record unless its flight number is already present.
    ///
    /// A duplicate is reported with a warning and leaves the registry as is.
    pub fn add(&mut self, record: FlightRecord) -> AddOutcome {
        if self.contains(&record.flight_number) {
            warn!(
                flight_number = %record.flight_number,
                "flight number already exists"
            );
            return AddOutcome::DuplicateRejected;
        }

        debug!("Added flight {}", record.flight_number);
        self.flights.push(record);
        AddOutcome::Inserted
    }

    /// Remove the record with the given flight number.
    ///
    /// Returns `true` if a record was removed. Unknown flight numbers are
    /// ignored. The remaining records keep their relative order.
    pub fn remove(&mut self, flight_number: &str) -> bool {
        let before = self.flights.len();
        self.flights.retain(|flight| flight.flight_number != flight_number);
        let removed = self.flights.len() != before;
        if removed {
            debug!("Removed flight {}", flight_number);
        }
        removed
    }

    /// All records with the given status, in registry order.
    #[must_use]
    pub fn filter_by_status(&self, status: Status) -> Vec<&FlightRecord> {
        self.flights
            .iter()
            .filter(|flight| flight.has_status(status))
            .collect()
    }

    /// Compute and store `duration_minutes` for every record in `records`.
    ///
    /// Every record is parsed before any is written, so on error the whole
    /// batch is left untouched. Existing durations are overwritten.
    ///
    /// # Errors
    ///
    /// Returns the first missing or malformed timestamp encountered.
    pub fn compute_durations(records: &mut [FlightRecord]) -> Result<&mut [FlightRecord]> {
        let durations = records
            .iter()
            .map(FlightRecord::duration)
            .collect::<Result<Vec<_>>>()?;

        for (record, minutes) in records.iter_mut().zip(durations) {
            record.duration_minutes = Some(minutes);
        }
        Ok(records)
    }

    /// Recompute `duration_minutes` for every stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if any stored record has a missing or malformed
    /// timestamp. No record is modified in that case.
    pub fn ensure_durations(&mut self) -> Result<()> {
        Self::compute_durations(&mut self.flights)?;
        Ok(())
    }

    /// The record with the greatest duration.
    ///
    /// Returns `Ok(None)` for an empty registry. Otherwise every stored
    /// record's duration is recomputed first (see
    /// [`ensure_durations`](Self::ensure_durations)), then the earliest
    /// record with the maximum duration is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if any stored record's duration cannot be computed.
    pub fn longest_flight(&mut self) -> Result<Option<&FlightRecord>> {
        if self.flights.is_empty() {
            return Ok(None);
        }
        self.ensure_durations()?;

        // `Iterator::max_by_key` keeps the last maximum; ties go to the first.
        Ok(self.flights.iter().reduce(|best, flight| {
            if flight.duration_minutes > best.duration_minutes {
                flight
            } else {
                best
            }
        }))
    }

    /// Look up a record by flight number.
    #[must_use]
    pub fn get(&self, flight_number: &str) -> Option<&FlightRecord> {
        self.flights
            .iter()
            .find(|flight| flight.flight_number == flight_number)
    }

    /// Check whether a flight number is present.
    #[must_use]
    pub fn contains(&self, flight_number: &str) -> bool {
        self.get(flight_number).is_some()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FlightRecord> {
        self.flights.iter()
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Check whether the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Count records by status.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        self.flights
            .iter()
            .fold(RegistryStats::default(), |mut stats, flight| {
                stats.total += 1;
                match flight.status {
                    Some(Status::OnTime) => stats.on_time += 1,
                    Some(Status::Delayed) => stats.delayed += 1,
                    Some(Status::Cancelled) => stats.cancelled += 1,
                    None => stats.unknown += 1,
                }
                if flight.duration_minutes.is_some() {
                    stats.with_duration += 1;
                }
                stats
            })
    }
}

impl<'a> IntoIterator for &'a FlightRegistry {
    type Item = &'a FlightRecord;
    type IntoIter = std::slice::Iter<'a, FlightRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.flights.iter()
    }
}
