//! `flightregistry` - An in-memory registry of flight records
//!
//! This library holds flights in insertion order keyed by flight number, and
//! answers status filtering and duration queries, including finding the
//! longest flight.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod flight;
pub mod logging;
pub mod registry;

pub use config::Config;
pub use error::{Error, Result};
pub use flight::{FlightRecord, Status};
pub use logging::init_logging;
pub use registry::{AddOutcome, FlightRegistry, RegistryStats};
