//! `flightreg` - CLI for flightregistry
//!
//! Loads a JSON file of flights into a registry and prints query results.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use flightregistry::cli::{Cli, Command, ConfigCommand, InputArgs};
use flightregistry::config::OutputFormat;
use flightregistry::{init_logging, Config, FlightRecord, FlightRegistry, Status};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::List(cmd) => {
            let mut registry = load_registry(&config, &cmd.input)?;
            for number in &cmd.exclude {
                registry.remove(number);
            }
            let flights = match cmd.status {
                Some(status) => registry.filter_by_status(Status::from(status)),
                None => registry.iter().collect(),
            };
            print_flights(&config, &cmd.input, &flights)
        }
        Command::Longest(cmd) => {
            let mut registry = load_registry(&config, &cmd.input)?;
            let format = output_format(&config, &cmd.input);
            match registry.longest_flight()? {
                Some(flight) => print_flights(&config, &cmd.input, &[flight]),
                None if format == OutputFormat::Json => print_json(&config, &serde_json::Value::Null),
                None => {
                    println!("No flights.");
                    Ok(())
                }
            }
        }
        Command::Durations(cmd) => {
            let mut registry = load_registry(&config, &cmd.input)?;
            registry.ensure_durations()?;
            let flights: Vec<_> = registry.iter().collect();
            print_flights(&config, &cmd.input, &flights)
        }
        Command::Stats(cmd) => {
            let registry = load_registry(&config, &cmd.input)?;
            handle_stats(&config, &cmd.input, &registry)
        }
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn load_registry(config: &Config, input: &InputArgs) -> anyhow::Result<FlightRegistry> {
    let Some(path) = flights_path(config, input) else {
        bail!("no flights file given; pass --file or set input.flights_path");
    };
    Ok(FlightRegistry::load_json(&path)?)
}

fn flights_path(config: &Config, input: &InputArgs) -> Option<PathBuf> {
    input
        .file
        .clone()
        .or_else(|| config.input.flights_path.clone())
}

fn output_format(config: &Config, input: &InputArgs) -> OutputFormat {
    input.format.unwrap_or(config.output.format)
}

fn print_json<T: serde::Serialize + ?Sized>(config: &Config, value: &T) -> anyhow::Result<()> {
    let rendered = if config.output.pretty_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

fn print_flights(
    config: &Config,
    input: &InputArgs,
    flights: &[&FlightRecord],
) -> anyhow::Result<()> {
    match output_format(config, input) {
        OutputFormat::Json => print_json(config, flights)?,
        OutputFormat::Plain => {
            for flight in flights {
                println!("{}", plain_line(flight));
            }
        }
        OutputFormat::Table => {
            println!(
                "{:<10} {:<16} {:<16} {:<10} {:>8}",
                "FLIGHT", "DEPARTURE", "ARRIVAL", "STATUS", "MINUTES"
            );
            for flight in flights {
                println!(
                    "{:<10} {:<16} {:<16} {:<10} {:>8}",
                    flight.flight_number,
                    flight.departure_time.as_deref().unwrap_or("-"),
                    flight.arrival_time.as_deref().unwrap_or("-"),
                    flight.status.map_or("-", |s| s.as_str()),
                    flight
                        .duration_minutes
                        .map_or_else(|| "-".to_string(), |m| m.to_string()),
                );
            }
        }
    }
    Ok(())
}

fn plain_line(flight: &FlightRecord) -> String {
    let mut line = flight.flight_number.clone();
    if let Some(status) = flight.status {
        line.push_str(&format!(" [{status}]"));
    }
    if let (Some(departure), Some(arrival)) = (&flight.departure_time, &flight.arrival_time) {
        line.push_str(&format!(" {departure} -> {arrival}"));
    }
    if let Some(minutes) = flight.duration_minutes {
        line.push_str(&format!(" ({minutes} min)"));
    }
    line
}

fn handle_stats(
    config: &Config,
    input: &InputArgs,
    registry: &FlightRegistry,
) -> anyhow::Result<()> {
    let stats = registry.stats();
    if output_format(config, input) == OutputFormat::Json {
        let value = serde_json::json!({
            "total": stats.total,
            "ON TIME": stats.on_time,
            "DELAYED": stats.delayed,
            "CANCELLED": stats.cancelled,
            "unknown": stats.unknown,
        });
        return print_json(config, &value);
    }

    println!("Flights:   {}", stats.total);
    println!("ON TIME:   {}", stats.on_time);
    println!("DELAYED:   {}", stats.delayed);
    println!("CANCELLED: {}", stats.cancelled);
    if stats.unknown > 0 {
        println!("Unknown:   {}", stats.unknown);
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Input]");
                match &config.input.flights_path {
                    Some(path) => println!("  Flights path:  {}", path.display()),
                    None => println!("  Flights path:  (not set)"),
                }
                println!();
                println!("[Output]");
                println!("  Format:        {:?}", config.output.format);
                println!("  Pretty JSON:   {}", config.output.pretty_json);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
